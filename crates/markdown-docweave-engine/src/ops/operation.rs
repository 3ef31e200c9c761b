use serde::Serialize;

use crate::span::{Span, unit_len};

use super::style::{CellStyle, ParagraphStyle, TextStyle};

/// List presets used when turning paragraphs into a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListPreset {
    BulletDiscCircleSquare,
    NumberedDecimalAlphaRoman,
}

/// Page layout of the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentMode {
    /// Paginated. Tables never grow wider than the page.
    Pages,
    Pageless,
}

/// A single positional edit against the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    InsertText {
        at: usize,
        text: String,
    },
    SetParagraphStyle {
        range: Span,
        style: ParagraphStyle,
    },
    SetTextStyle {
        range: Span,
        style: TextStyle,
    },
    /// Turns every paragraph touching `range` into one list.
    CreateListRun {
        range: Span,
        preset: ListPreset,
    },
    InsertPageBreak {
        at: usize,
    },
    DeleteRange {
        range: Span,
    },
    /// Inserts an empty `rows` x `columns` table.
    InsertTableGrid {
        at: usize,
        rows: usize,
        columns: usize,
    },
    StyleTableCell {
        /// Start offset of the table, as discovered from the store.
        table_start: usize,
        row: usize,
        column: usize,
        style: CellStyle,
    },
    SetDocumentMode {
        mode: DocumentMode,
    },
}

impl Operation {
    pub fn insert_text(at: usize, text: impl Into<String>) -> Self {
        Operation::InsertText {
            at,
            text: text.into(),
        }
    }

    /// The range a styling operation applies to. `None` for edits.
    pub fn style_range(&self) -> Option<Span> {
        match self {
            Operation::SetParagraphStyle { range, .. }
            | Operation::SetTextStyle { range, .. }
            | Operation::CreateListRun { range, .. } => Some(*range),
            _ => None,
        }
    }

    /// How many units this operation adds to (positive) or removes from
    /// (negative) the document, when that is known without the store.
    pub fn length_delta(&self) -> Option<isize> {
        match self {
            Operation::InsertText { text, .. } => Some(unit_len(text) as isize),
            Operation::InsertPageBreak { .. } => Some(1),
            Operation::DeleteRange { range } => Some(-(range.len() as isize)),
            Operation::InsertTableGrid { .. } => None,
            _ => Some(0),
        }
    }
}
