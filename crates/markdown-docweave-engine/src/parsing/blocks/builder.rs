use crate::parsing::inline::format;

use super::{
    classify::{LineClass, LineKind},
    kinds::TablePipe,
    types::{Block, TableBlock},
};

#[derive(Debug, Clone, Default)]
enum LeafState {
    #[default]
    None,
    Table {
        rows: Vec<Vec<String>>,
    },
}

/// Phase 2 of block parsing: turns classified lines into [`Block`]s.
///
/// Every line is a block on its own except tables, which keep consuming
/// lines for as long as they contain a pipe. Blank lines only close an
/// open table; they never reach the output.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.in_table() {
            if c.has_pipe {
                self.extend_table(c.line);
                return;
            }
            self.flush_table();
        }

        match &c.kind {
            LineKind::Blank | LineKind::Rule => {}
            LineKind::PageBreak => self.out.push(Block::PageBreak),
            LineKind::Heading { level, text } => self.out.push(Block::Heading {
                level: *level,
                text: format(text),
            }),
            LineKind::TableStart => {
                self.leaf = LeafState::Table { rows: vec![] };
                self.extend_table(c.line);
            }
            LineKind::ListItem(item) => self.out.push(Block::ListItem {
                kind: item.kind,
                text: format(item.text),
                nesting: item.nesting,
            }),
            LineKind::Paragraph { text } => self.out.push(Block::Paragraph { text: format(text) }),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_table();
        self.out
    }

    fn in_table(&self) -> bool {
        matches!(self.leaf, LeafState::Table { .. })
    }

    fn extend_table(&mut self, line: &str) {
        let LeafState::Table { rows } = &mut self.leaf else {
            return;
        };
        if TablePipe::is_separator(line) {
            return;
        }
        let cells = TablePipe::split_row(line);
        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    fn flush_table(&mut self) {
        if let LeafState::Table { rows } = std::mem::take(&mut self.leaf)
            && !rows.is_empty()
        {
            self.out.push(Block::Table(TableBlock::new(rows)));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
