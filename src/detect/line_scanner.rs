//! Line-shape declaration detection.
//!
//! Classifies each physical line of a Java source file by matching the
//! trimmed text against an ordered list of shape rules. The scanner has no
//! notion of block structure: a line is a declaration if it looks like one.
//!
//! Rules are tried in a fixed priority order and the first match wins:
//!
//! 1. Type: `public [modifiers] class|interface|enum|record Name`
//! 2. Constructor: `public Name(`
//! 3. Method: `public [modifiers] [<T>] ReturnType name(`
//! 4. Field: `public [modifiers] Type name =` or `public [modifiers] Type name;`
//!
//! The constructor rule cannot tell a constructor from any other
//! `public identifier(` shape; such lines are reported as constructors.

use lazy_static::lazy_static;
use regex::Regex;

use super::{DeclarationKind, DeclarationSite, Detector, Sites};

lazy_static! {
    static ref TYPE_PATTERN: Regex = Regex::new(
        r"^public\s+(?:(?:abstract|final|static|sealed|non-sealed|strictfp)\s+)*(?:class|interface|enum|record)\s+(\w+)"
    ).unwrap();

    static ref CONSTRUCTOR_PATTERN: Regex = Regex::new(r"^public\s+(\w+)\s*\(").unwrap();

    static ref METHOD_PATTERN: Regex = Regex::new(
        r"^public\s+(?:(?:static|final|abstract|synchronized|native|default|strictfp)\s+)*(?:<[^()]*>\s+)?([\w.]+(?:<[^()=;]*>)?(?:\[\])*)\s+(\w+)\s*\("
    ).unwrap();

    static ref FIELD_PATTERN: Regex = Regex::new(
        r"^public\s+(?:(?:static|final|transient|volatile)\s+)*[\w.]+(?:<[^()=;]*>)?(?:\[\])*\s+(\w+)\s*(?:=|;)"
    ).unwrap();
}

/// Detector that classifies lines by regex shape rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineScanner;

impl LineScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for LineScanner {
    fn name(&self) -> &'static str {
        "line"
    }

    fn detect<'a>(&self, source: &'a str) -> anyhow::Result<Sites<'a>> {
        Ok(Box::new(
            source
                .lines()
                .enumerate()
                .filter_map(|(index, line)| classify_line(line, index)),
        ))
    }
}

/// Classify a single physical line.
///
/// Returns `None` for lines that match no rule.
pub fn classify_line(line: &str, index: usize) -> Option<DeclarationSite> {
    let trimmed = line.trim();
    if !trimmed.starts_with("public") {
        return None;
    }

    if let Some(caps) = TYPE_PATTERN.captures(trimmed) {
        return Some(
            DeclarationSite::new(DeclarationKind::Type, &caps[1], index)
                .with_generic(trimmed.contains('<')),
        );
    }

    if let Some(caps) = CONSTRUCTOR_PATTERN.captures(trimmed) {
        let rest = &trimmed[caps.get(0).map_or(trimmed.len(), |m| m.end())..];
        return Some(
            DeclarationSite::new(DeclarationKind::Constructor, &caps[1], index)
                .with_parameters(parameter_names(rest)),
        );
    }

    if let Some(caps) = METHOD_PATTERN.captures(trimmed) {
        let rest = &trimmed[caps.get(0).map_or(trimmed.len(), |m| m.end())..];
        return Some(
            DeclarationSite::new(DeclarationKind::Method, &caps[2], index)
                .with_parameters(parameter_names(rest))
                .with_return_value(&caps[1] != "void"),
        );
    }

    FIELD_PATTERN
        .captures(trimmed)
        .map(|caps| DeclarationSite::new(DeclarationKind::Field, &caps[1], index))
}

/// Extract parameter names from the text following a parameter list's `(`.
///
/// Reads up to the matching `)`, or to the end of the text when the list
/// continues on a later line. Commas nested in `<>` or `()` do not split.
/// Entries without both a type and a name are ignored.
fn parameter_names(after_paren: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut angle = 0usize;
    let mut paren = 0usize;

    for ch in after_paren.chars() {
        match ch {
            '<' => angle += 1,
            '>' => angle = angle.saturating_sub(1),
            '(' => paren += 1,
            ')' if paren == 0 => break,
            ')' => paren -= 1,
            ',' if angle == 0 && paren == 0 => {
                pieces.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }
    pieces.push(current);

    pieces
        .iter()
        .filter_map(|piece| {
            let tokens: Vec<&str> = piece.split_whitespace().collect();
            if tokens.len() < 2 {
                return None;
            }
            let name = tokens[tokens.len() - 1]
                .trim_start_matches('.')
                .trim_end_matches("[]");
            if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
                return None;
            }
            Some(name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> Option<DeclarationSite> {
        classify_line(line, 0)
    }

    #[test]
    fn test_type_headers() {
        let site = classify("public class OrderService {").unwrap();
        assert_eq!(site.kind, DeclarationKind::Type);
        assert_eq!(site.name, "OrderService");
        assert!(!site.generic);

        let site = classify("    public abstract class Shape implements Drawable {").unwrap();
        assert_eq!(site.kind, DeclarationKind::Type);
        assert_eq!(site.name, "Shape");

        assert_eq!(classify("public interface Repo {").unwrap().kind, DeclarationKind::Type);
        assert_eq!(classify("public enum Color {").unwrap().kind, DeclarationKind::Type);

        let record = classify("public record Point(int x, int y) {").unwrap();
        assert_eq!(record.kind, DeclarationKind::Type);
        assert_eq!(record.name, "Point");
    }

    #[test]
    fn test_generic_type_header() {
        let site = classify("public class Box<T> {").unwrap();
        assert_eq!(site.kind, DeclarationKind::Type);
        assert!(site.generic);
    }

    #[test]
    fn test_constructor() {
        let site = classify("  public Order(String id, int quantity) {").unwrap();
        assert_eq!(site.kind, DeclarationKind::Constructor);
        assert_eq!(site.name, "Order");
        assert_eq!(site.parameters, vec!["id", "quantity"]);
    }

    #[test]
    fn test_method_shapes() {
        let site = classify("public int getBar() {").unwrap();
        assert_eq!(site.kind, DeclarationKind::Method);
        assert_eq!(site.name, "getBar");
        assert!(site.has_return_value);
        assert!(site.parameters.is_empty());

        let site = classify("public static void main(String[] args) {").unwrap();
        assert_eq!(site.name, "main");
        assert!(!site.has_return_value);
        assert_eq!(site.parameters, vec!["args"]);

        let site = classify("public List<String> names(Map<String, Integer> counts, int limit) {").unwrap();
        assert_eq!(site.name, "names");
        assert_eq!(site.parameters, vec!["counts", "limit"]);

        let site = classify("public <T> T convert(Class<T> type) {").unwrap();
        assert_eq!(site.name, "convert");
        assert_eq!(site.parameters, vec!["type"]);

        let site = classify("public byte[] encode(final String... values) {").unwrap();
        assert_eq!(site.name, "encode");
        assert_eq!(site.parameters, vec!["values"]);
    }

    #[test]
    fn test_method_parameters_continue_on_next_line() {
        let site = classify("public void send(String to,").unwrap();
        assert_eq!(site.kind, DeclarationKind::Method);
        assert_eq!(site.parameters, vec!["to"]);
    }

    #[test]
    fn test_annotated_parameter() {
        let site = classify("public void save(@Size(min = 1, max = 9) String code) {").unwrap();
        assert_eq!(site.parameters, vec!["code"]);
    }

    #[test]
    fn test_fields() {
        let site = classify("public int count;").unwrap();
        assert_eq!(site.kind, DeclarationKind::Field);
        assert_eq!(site.name, "count");

        let site = classify("public static final String DEFAULT_NAME = \"x\";").unwrap();
        assert_eq!(site.kind, DeclarationKind::Field);
        assert_eq!(site.name, "DEFAULT_NAME");

        let site = classify("public Map<String, Integer> totals = new HashMap<>();").unwrap();
        assert_eq!(site.name, "totals");
    }

    #[test]
    fn test_non_declarations() {
        assert!(classify("private int hidden;").is_none());
        assert!(classify("int local = 0;").is_none());
        assert!(classify(" * public void documented() {").is_none());
        assert!(classify("return publicValue;").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn test_factory_shape_is_constructor() {
        // A bare `public name(` line is always taken as a constructor.
        let site = classify("public create(String id) {").unwrap();
        assert_eq!(site.kind, DeclarationKind::Constructor);
    }

    #[test]
    fn test_detect_reports_line_indices() {
        let source = "package a;\n\npublic class Foo {\n    public int x;\n}\n";
        let sites: Vec<_> = LineScanner.detect(source).unwrap().collect();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].line, 2);
        assert_eq!(sites[1].line, 3);
    }

    #[test]
    fn test_crlf_lines() {
        let source = "public class Foo {\r\n    public void run() {\r\n    }\r\n}\r\n";
        let sites: Vec<_> = LineScanner.detect(source).unwrap().collect();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[1].name, "run");
        assert_eq!(sites[1].line, 1);
    }
}
