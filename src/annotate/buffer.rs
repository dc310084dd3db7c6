//! Mutable line buffer for one source file.

/// UTF-8 byte-order mark some editors put at the start of a file.
pub const BOM: char = '\u{feff}';

/// Strip a leading byte-order mark, if present.
pub fn without_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Ordered lines of a source file, terminators included.
///
/// A leading byte-order mark is kept aside so line 0 starts with real
/// content. Joining the lines reproduces the original text byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    lines: Vec<String>,
    newline: &'static str,
    bom: bool,
}

impl SourceBuffer {
    /// Split text into lines, keeping each line's terminator.
    ///
    /// The newline style is CRLF if any line ends in `\r\n`, LF otherwise.
    pub fn parse(text: &str) -> Self {
        let body = without_bom(text);
        let bom = body.len() != text.len();
        let lines: Vec<String> = body.split_inclusive('\n').map(str::to_string).collect();
        let newline = if lines.iter().any(|l| l.ends_with("\r\n")) {
            "\r\n"
        } else {
            "\n"
        };
        Self {
            lines,
            newline,
            bom,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line terminator used for inserted text.
    pub fn newline(&self) -> &'static str {
        self.newline
    }

    /// Line content without its terminator.
    pub fn line_text(&self, index: usize) -> Option<&str> {
        self.lines
            .get(index)
            .map(|l| l.trim_end_matches('\n').trim_end_matches('\r'))
    }

    /// Leading whitespace of a line (empty for missing lines).
    pub fn indent_of(&self, index: usize) -> &str {
        let text = self.line_text(index).unwrap_or("");
        let trimmed = text.trim_start();
        &text[..text.len() - trimmed.len()]
    }

    /// Reassemble the full text.
    pub fn to_text(&self) -> String {
        let text = self.lines.concat();
        if self.bom {
            format!("{}{}", BOM, text)
        } else {
            text
        }
    }
}
