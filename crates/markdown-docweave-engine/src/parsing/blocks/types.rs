use serde::Serialize;

use crate::parsing::inline::FormattedText;

/// Which list a list item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Bullet,
    Numbered,
}

/// A table as parsed: cell text is kept verbatim, no inline formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableBlock {
    /// Rows in source order. Rows may differ in width.
    pub rows: Vec<Vec<String>>,
    /// The first row is a header row. True iff there is more than one row.
    pub has_header: bool,
}

impl TableBlock {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        let has_header = rows.len() > 1;
        Self { rows, has_header }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row. Short rows are missing trailing cells.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// One structurally classified unit of parsed markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading {
        /// 1 to 6.
        level: u8,
        text: FormattedText,
    },
    Paragraph {
        text: FormattedText,
    },
    ListItem {
        kind: ListKind,
        text: FormattedText,
        /// 0 for a top-level item.
        nesting: usize,
    },
    Table(TableBlock),
    PageBreak,
}

impl Block {
    /// The formatted text of text-bearing blocks.
    pub fn text(&self) -> Option<&FormattedText> {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text }
            | Block::ListItem { text, .. } => Some(text),
            Block::Table(_) | Block::PageBreak => None,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }
}
