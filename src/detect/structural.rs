//! Syntax-tree declaration detection using tree-sitter.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, Tree};

use super::{DeclarationKind, DeclarationSite, Detector, Sites};

/// Tree-sitter query for annotatable Java declarations.
///
/// Captures:
/// - `type`: class, interface, enum and record declarations
/// - `constructor`: constructor declarations
/// - `method`: method declarations
/// - `field`: field declarations (filtered to `public` after matching)
const DECLARATION_QUERY: &str = r#"
(class_declaration) @type
(interface_declaration) @type
(enum_declaration) @type
(record_declaration) @type
(constructor_declaration) @constructor
(method_declaration) @method
(field_declaration) @field
"#;

/// Detector backed by a full tree-sitter-java parse.
///
/// A file with any syntax error is rejected as a whole rather than
/// annotated from a partial tree.
pub struct StructuralParser {
    language: Language,
}

impl StructuralParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }

    fn parse(&self, source: &str) -> anyhow::Result<Tree> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("failed to parse Java source"))?;

        let root = tree.root_node();
        if root.has_error() {
            let line = first_error(root)
                .map(|n| n.start_position().row + 1)
                .unwrap_or(1);
            anyhow::bail!("syntax error near line {}", line);
        }

        Ok(tree)
    }

    fn extract_sites(&self, tree: &Tree, source: &[u8]) -> anyhow::Result<Vec<DeclarationSite>> {
        let query = Query::new(&self.language, DECLARATION_QUERY)?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), source);

        let mut sites = Vec::new();

        while let Some(m) = matches.next() {
            for capture in m.captures {
                let node = capture.node;
                let line = node.start_position().row;
                match query.capture_names()[capture.index as usize] {
                    "type" => {
                        if let Some(name) = field_text(node, "name", source) {
                            let generic = node.child_by_field_name("type_parameters").is_some();
                            sites.push(
                                DeclarationSite::new(DeclarationKind::Type, name, line)
                                    .with_generic(generic),
                            );
                        }
                    }
                    "constructor" => {
                        if let Some(name) = field_text(node, "name", source) {
                            sites.push(
                                DeclarationSite::new(DeclarationKind::Constructor, name, line)
                                    .with_parameters(parameter_names(node, source)),
                            );
                        }
                    }
                    "method" => {
                        if let Some(name) = field_text(node, "name", source) {
                            let returns = node
                                .child_by_field_name("type")
                                .map(|t| t.kind() != "void_type")
                                .unwrap_or(false);
                            sites.push(
                                DeclarationSite::new(DeclarationKind::Method, name, line)
                                    .with_parameters(parameter_names(node, source))
                                    .with_return_value(returns),
                            );
                        }
                    }
                    "field" => {
                        if !is_public(node) {
                            continue;
                        }
                        let mut walker = node.walk();
                        for declarator in node.children_by_field_name("declarator", &mut walker) {
                            if let Some(name) = field_text(declarator, "name", source) {
                                sites.push(DeclarationSite::new(DeclarationKind::Field, name, line));
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        // Stable: declarators on one line keep their source order.
        sites.sort_by_key(|s| s.line);
        Ok(sites)
    }
}

impl Default for StructuralParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for StructuralParser {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn detect<'a>(&self, source: &'a str) -> anyhow::Result<Sites<'a>> {
        let tree = self.parse(source)?;
        let sites = self.extract_sites(&tree, source.as_bytes())?;
        Ok(Box::new(sites.into_iter()))
    }
}

fn field_text(node: Node, field: &str, source: &[u8]) -> Option<String> {
    node.child_by_field_name(field)
        .and_then(|n| n.utf8_text(source).ok())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn is_public(node: Node) -> bool {
    let mut walker = node.walk();
    let found = node
        .children(&mut walker)
        .filter(|c| c.kind() == "modifiers")
        .any(|modifiers| {
            let mut inner = modifiers.walk();
            let public = modifiers.children(&mut inner).any(|m| m.kind() == "public");
            public
        });
    found
}

fn parameter_names(node: Node, source: &[u8]) -> Vec<String> {
    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut walker = params.walk();
    params
        .named_children(&mut walker)
        .filter_map(|param| match param.kind() {
            "formal_parameter" => field_text(param, "name", source),
            "spread_parameter" => {
                let mut inner = param.walk();
                let declarator = param
                    .named_children(&mut inner)
                    .find(|c| c.kind() == "variable_declarator");
                declarator.and_then(|d| field_text(d, "name", source))
            }
            _ => None,
        })
        .collect()
}

/// Find the first ERROR or MISSING node in document order.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut walker = node.walk();
    let children: Vec<Node> = node.children(&mut walker).collect();
    children
        .into_iter()
        .filter(|c| c.has_error())
        .find_map(first_error)
}
