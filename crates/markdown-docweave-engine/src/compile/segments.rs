use crate::parsing::blocks::{Block, TableBlock};

/// A run of blocks compiled in one go, or a single table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment<'a> {
    /// Consecutive non-table blocks. Never empty.
    Text(&'a [Block]),
    /// A table and its position in the full block list.
    Table(usize, &'a TableBlock),
}

/// Splits `blocks` at table boundaries into alternating segments.
pub fn segments(blocks: &[Block]) -> Vec<Segment<'_>> {
    let mut out = vec![];
    let mut text_start = 0;

    for (index, block) in blocks.iter().enumerate() {
        if let Block::Table(table) = block {
            if index > text_start {
                out.push(Segment::Text(&blocks[text_start..index]));
            }
            out.push(Segment::Table(index, table));
            text_start = index + 1;
        }
    }
    if text_start < blocks.len() {
        out.push(Segment::Text(&blocks[text_start..]));
    }
    out
}
