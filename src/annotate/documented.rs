//! Already-documented check.

/// Comment openers that mark the following declaration as documented.
const COMMENT_OPENERS: &[&str] = &["/**", "/*", "//"];

/// Check whether the declaration at `index` already has a comment above it.
///
/// Scans strictly upward over blank lines. The declaration is documented
/// when the first non-blank line opens a comment (`/**`, `/*`, `//`) or is
/// the closing line of a multi-line block comment (` */`, ` * text */`).
/// Code followed by an inline comment does not count. Nothing above means
/// undocumented.
pub fn is_documented<S: AsRef<str>>(lines: &[S], index: usize) -> bool {
    let above = &lines[..index.min(lines.len())];

    match above.iter().rev().map(|l| l.as_ref().trim()).find(|l| !l.is_empty()) {
        Some(line) => {
            COMMENT_OPENERS.iter().any(|opener| line.starts_with(opener))
                || (line.starts_with('*') && line.ends_with("*/"))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_file_is_undocumented() {
        let lines = ["public class A {"];
        assert!(!is_documented(&lines, 0));
    }

    #[test]
    fn test_openers() {
        for opener in ["/** Doc. */", "/* note */", "// note", "/**"] {
            let lines = [opener, "public int x;"];
            assert!(is_documented(&lines, 1), "opener {:?}", opener);
        }
    }

    #[test]
    fn test_multi_line_block_close() {
        let lines = ["    /**", "     * Doc.", "     */", "    public void run() {"];
        assert!(is_documented(&lines, 3));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let lines = ["// header", "", "   ", "\t", "public class A {"];
        assert!(is_documented(&lines, 4));
    }

    #[test]
    fn test_code_above_is_undocumented() {
        let lines = ["int a = 1;", "", "public int x;"];
        assert!(!is_documented(&lines, 2));

        let lines = ["@Override", "public String toString() {"];
        assert!(!is_documented(&lines, 1));
    }

    #[test]
    fn test_trailing_inline_comment_is_code() {
        let lines = ["int a = 1; /* tmp */", "public int x;"];
        assert!(!is_documented(&lines, 1));

        let lines = ["    * Last line of doc. */", "    public int x;"];
        assert!(is_documented(&lines, 1));
    }

    #[test]
    fn test_only_blank_lines_above() {
        let lines = ["", "", "public class A {"];
        assert!(!is_documented(&lines, 2));
    }
}
