use serde::Serialize;

use crate::{
    span::Span,
    store::{Table, TextRun},
};

/// Progress of one table through materialization.
///
/// Transitions are strictly forward. A failed relocation ends the machine
/// early with an estimated outcome instead of moving on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableState {
    /// The compiled one-unit placeholder is still in the document.
    PlaceholderPresent,
    /// The placeholder is gone and an empty grid has been inserted.
    GridInserted,
    /// The grid has been found and every cell's insertion point is known.
    CellsDiscovered(LocatedTable),
    CellsPopulated,
    StylesApplied { end: usize },
}

/// A table found in the fetched structure, with the facts needed to fill
/// and style it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedTable {
    pub span: Span,
    /// Row-major.
    pub cells: Vec<Vec<LocatedCell>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedCell {
    /// Where text inserted into the cell lands.
    pub paragraph_start: usize,
    /// Text runs with visible content.
    pub runs: Vec<Span>,
}

impl LocatedTable {
    pub fn from_tree(span: Span, table: &Table) -> Self {
        let cells = table
            .rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| LocatedCell {
                        paragraph_start: cell.first_paragraph_offset(),
                        runs: cell
                            .text_runs()
                            .filter(|run| !run.is_blank())
                            .map(TextRun::span)
                            .collect(),
                    })
                    .collect()
            })
            .collect();
        Self { span, cells }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&LocatedCell> {
        self.cells.get(row)?.get(column)
    }
}

/// Where the document continues after a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "offset", rename_all = "snake_case")]
pub enum TableOutcome {
    /// The end offset read back from the store.
    Exact(usize),
    /// The table could not be relocated; the offset is a guess.
    Estimated(usize),
}

impl TableOutcome {
    pub fn end_offset(self) -> usize {
        match self {
            TableOutcome::Exact(end) | TableOutcome::Estimated(end) => end,
        }
    }

    pub fn is_estimated(self) -> bool {
        matches!(self, TableOutcome::Estimated(_))
    }
}
