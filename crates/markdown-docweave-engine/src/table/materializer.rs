use crate::{
    brand::BrandConfig,
    ops::{CellStyle, Operation, Padding, TextStyle},
    parsing::blocks::TableBlock,
    span::Span,
    store::{DocumentStore, DocumentTree, StoreError},
};

use super::state::{LocatedTable, TableOutcome, TableState};

/// How far from the requested offset a freshly inserted table may start
/// and still be recognised as ours.
pub const RELOCATION_TOLERANCE: usize = 5;

/// Offset assumed after a table that could not be relocated.
const ESTIMATED_TABLE_LENGTH: usize = 10;

/// Replaces the placeholder at `at` with `table`, filled and styled.
///
/// Store failures propagate. Failing to find the table again is not an
/// error: it is logged and an estimated end offset is returned so the rest
/// of the document can still be written.
pub fn materialize<S>(
    store: &mut S,
    document_id: &str,
    table: &TableBlock,
    at: usize,
    brand: &BrandConfig,
) -> Result<TableOutcome, StoreError>
where
    S: DocumentStore + ?Sized,
{
    let mut m = Materializer {
        store,
        document_id,
        table,
        at,
        brand,
    };
    let mut state = TableState::PlaceholderPresent;
    loop {
        log::debug!("table at {at}: {}", state_name(&state));
        state = match m.step(state)? {
            Transition::Next(next) => next,
            Transition::Done(outcome) => return Ok(outcome),
        };
    }
}

enum Transition {
    Next(TableState),
    Done(TableOutcome),
}

struct Materializer<'a, S: ?Sized> {
    store: &'a mut S,
    document_id: &'a str,
    table: &'a TableBlock,
    at: usize,
    brand: &'a BrandConfig,
}

impl<S: DocumentStore + ?Sized> Materializer<'_, S> {
    fn step(&mut self, state: TableState) -> Result<Transition, StoreError> {
        let next = match state {
            TableState::PlaceholderPresent => {
                let rows = self.table.row_count();
                let columns = self.table.column_count();
                if rows == 0 || columns == 0 {
                    return Ok(Transition::Done(TableOutcome::Exact(self.at + 1)));
                }
                self.apply(&[Operation::DeleteRange {
                    range: Span::new(self.at, self.at + 1),
                }])?;
                self.apply(&[Operation::InsertTableGrid {
                    at: self.at,
                    rows,
                    columns,
                }])?;
                TableState::GridInserted
            }
            TableState::GridInserted => match self.locate()? {
                Some(located) => TableState::CellsDiscovered(located),
                None => return Ok(self.estimated("after inserting the grid")),
            },
            TableState::CellsDiscovered(located) => {
                let inserts = populate_ops(self.table, &located);
                if !inserts.is_empty() {
                    self.apply(&inserts)?;
                }
                TableState::CellsPopulated
            }
            TableState::CellsPopulated => match self.locate()? {
                Some(located) => {
                    let styles = style_ops(self.table, &located, self.brand);
                    if !styles.is_empty() {
                        self.apply(&styles)?;
                    }
                    TableState::StylesApplied {
                        end: located.span.end,
                    }
                }
                None => return Ok(self.estimated("after filling the cells")),
            },
            TableState::StylesApplied { end } => {
                return Ok(Transition::Done(TableOutcome::Exact(end)));
            }
        };
        Ok(Transition::Next(next))
    }

    fn apply(&mut self, ops: &[Operation]) -> Result<(), StoreError> {
        self.store.apply_batch(self.document_id, ops)
    }

    fn locate(&self) -> Result<Option<LocatedTable>, StoreError> {
        let tree: DocumentTree = self.store.fetch_structure(self.document_id)?;
        Ok(tree
            .find_table_near(self.at, RELOCATION_TOLERANCE)
            .map(|(span, table)| LocatedTable::from_tree(span, table)))
    }

    fn estimated(&self, when: &str) -> Transition {
        log::warn!(
            "no table within {RELOCATION_TOLERANCE} of offset {} {when}; continuing with an estimate",
            self.at
        );
        Transition::Done(TableOutcome::Estimated(self.at + ESTIMATED_TABLE_LENGTH))
    }
}

/// Cell insertions in reverse row then column order, so each insertion
/// leaves every earlier cell offset valid.
fn populate_ops(table: &TableBlock, located: &LocatedTable) -> Vec<Operation> {
    let mut ops = vec![];
    for (r, row) in table.rows.iter().enumerate().rev() {
        for (c, text) in row.iter().enumerate().rev() {
            let text = text.replace("**", "");
            if text.is_empty() {
                continue;
            }
            let Some(cell) = located.cell(r, c) else {
                continue;
            };
            ops.push(Operation::insert_text(cell.paragraph_start, text));
        }
    }
    ops
}

fn style_ops(table: &TableBlock, located: &LocatedTable, brand: &BrandConfig) -> Vec<Operation> {
    let style = &brand.table;
    let is_header = |row: usize| table.has_header && row == 0;

    let mut cells = vec![];
    let mut text = vec![];
    for (r, row) in located.cells.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let cell_style = if is_header(r) {
                CellStyle {
                    background: Some(style.header_background),
                    padding: Some(Padding::HEADER),
                }
            } else {
                CellStyle {
                    background: style.row_header_background.filter(|_| r > 0 && c == 0),
                    padding: Some(Padding::DATA),
                }
            };
            cells.push(Operation::StyleTableCell {
                table_start: located.span.start,
                row: r,
                column: c,
                style: cell_style,
            });

            let run_style = TextStyle {
                bold: is_header(r).then_some(true),
                foreground: Some(if is_header(r) {
                    style.header_text
                } else {
                    style.body_text
                }),
                font_family: Some(style.font.clone()),
                font_size_pt: Some(style.font_size),
                ..TextStyle::default()
            };
            for &range in &cell.runs {
                text.push(Operation::SetTextStyle {
                    range,
                    style: run_style.clone(),
                });
            }
        }
    }
    cells.extend(text);
    cells
}

fn state_name(state: &TableState) -> &'static str {
    match state {
        TableState::PlaceholderPresent => "placeholder present",
        TableState::GridInserted => "grid inserted",
        TableState::CellsDiscovered(_) => "cells discovered",
        TableState::CellsPopulated => "cells populated",
        TableState::StylesApplied { .. } => "styles applied",
    }
}
