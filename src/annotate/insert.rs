//! Insertion engine.
//!
//! Inserting a block shifts every later line down. Applying blocks in
//! ascending original-line order while accumulating the number of lines
//! already inserted keeps each target valid: the current position of
//! original line `i` is `i + offset`.

use super::{PlannedComment, SourceBuffer};

/// Insert pre-rendered blocks above their original target lines.
///
/// `blocks` pairs an original line index with the lines to insert above it.
/// Returns the total number of lines inserted.
pub fn insert_blocks(lines: &mut Vec<String>, mut blocks: Vec<(usize, Vec<String>)>) -> usize {
    blocks.sort_by_key(|(line, _)| *line);

    let mut offset = 0;
    for (line, block) in blocks {
        let at = (line + offset).min(lines.len());
        let count = block.len();
        lines.splice(at..at, block);
        offset += count;
    }
    offset
}

/// Apply planned comments to a buffer.
///
/// Each block is indented like the declaration it documents and uses the
/// buffer's newline style. Returns the number of lines inserted.
pub fn apply_plan(buffer: &mut SourceBuffer, comments: &[PlannedComment]) -> usize {
    let newline = buffer.newline();
    let blocks: Vec<(usize, Vec<String>)> = comments
        .iter()
        .map(|c| (c.line, c.block.render(buffer.indent_of(c.line), newline)))
        .collect();

    insert_blocks(buffer.lines_mut(), blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::DeclarationKind;
    use crate::synth::CommentBlock;

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("L{}\n", i)).collect()
    }

    fn block(tag: &str, len: usize) -> Vec<String> {
        (0..len).map(|i| format!("{}{}\n", tag, i)).collect()
    }

    #[test]
    fn test_offset_accumulation() {
        let mut lines = numbered(10);
        let inserted = insert_blocks(
            &mut lines,
            vec![(1, block("a", 2)), (4, block("b", 3)), (8, block("c", 1))],
        );
        assert_eq!(inserted, 6);
        assert_eq!(lines.len(), 16);

        // Block j sits at i_j + sum of earlier block lengths.
        assert_eq!(lines[1], "a0\n");
        assert_eq!(lines[3], "L1\n");
        assert_eq!(lines[4 + 2], "b0\n");
        assert_eq!(lines[4 + 2 + 3], "L4\n");
        assert_eq!(lines[8 + 5], "c0\n");
        assert_eq!(lines[8 + 5 + 1], "L8\n");
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let mut a = numbered(6);
        let mut b = numbered(6);
        insert_blocks(&mut a, vec![(5, block("x", 2)), (0, block("y", 1))]);
        insert_blocks(&mut b, vec![(0, block("y", 1)), (5, block("x", 2))]);
        assert_eq!(a, b);
        assert_eq!(a[0], "y0\n");
        assert_eq!(a[6], "x0\n");
        assert_eq!(a[8], "L5\n");
    }

    #[test]
    fn test_original_order_preserved() {
        let mut lines = numbered(20);
        insert_blocks(
            &mut lines,
            vec![(0, block("a", 4)), (7, block("b", 2)), (19, block("c", 5))],
        );
        let originals: Vec<&String> = lines.iter().filter(|l| l.starts_with('L')).collect();
        let expected = numbered(20);
        assert_eq!(originals, expected.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_same_line_blocks_stack_in_order() {
        let mut lines = numbered(2);
        insert_blocks(&mut lines, vec![(1, block("a", 1)), (1, block("b", 1))]);
        assert_eq!(lines, vec!["L0\n", "a0\n", "b0\n", "L1\n"]);
    }

    #[test]
    fn test_apply_plan_indents_and_uses_newline() {
        let mut buffer = SourceBuffer::parse("class A {\r\n    int x;\r\n}\r\n");
        let comment = PlannedComment {
            line: 1,
            kind: DeclarationKind::Field,
            name: "x".to_string(),
            block: CommentBlock::builder().line("Doc.").build(),
        };
        let inserted = apply_plan(&mut buffer, &[comment]);

        assert_eq!(inserted, 3);
        assert_eq!(
            buffer.to_text(),
            "class A {\r\n    /**\r\n     * Doc.\r\n     */\r\n    int x;\r\n}\r\n"
        );
    }
}
