use std::collections::HashMap;

use xi_rope::{Rope, delta::Builder, rope::Utf16CodeUnitsMetric};

use crate::{
    ops::{DocumentMode, Operation},
    span::Span,
};

use super::{
    DocumentStore, StoreError,
    tree::{
        DocumentTree, ElementContent, Paragraph, StructuralElement, Table, TableCell, TableRow,
        TextRun,
    },
};

// Structure markers. Private-use code points, one unit each. Inserted
// text carrying them is stored with REPLACEMENT_CHARACTER in their place.
const SECTION_BREAK: char = '\u{E000}';
const TABLE_START: char = '\u{E001}';
const ROW_START: char = '\u{E002}';
const CELL_START: char = '\u{E003}';
const TABLE_END: char = '\u{E004}';
const PAGE_BREAK: char = '\u{E005}';

const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

fn is_reserved(c: char) -> bool {
    matches!(
        c,
        SECTION_BREAK | TABLE_START | ROW_START | CELL_START | TABLE_END | PAGE_BREAK
    )
}

/// Markers that end a paragraph. A page break sits inside one.
fn ends_paragraph(c: char) -> bool {
    is_reserved(c) && c != PAGE_BREAK
}

/// An in-process [`DocumentStore`].
///
/// Each document is one `Rope` holding the body in the same coordinate
/// space a remote rich-text service exposes: offset 0 is a section break,
/// the body always ends with a paragraph terminator, and tables are spelled
/// out with reserved marker characters so that cell offsets line up with
/// what the service would report. Styling operations are validated and
/// logged but do not change the text.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: HashMap<String, MemoryDocument>,
}

#[derive(Debug, Clone)]
struct MemoryDocument {
    rope: Rope,
    mode: DocumentMode,
    batches: Vec<Vec<Operation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document, replacing any document with the same id.
    pub fn create(&mut self, document_id: impl Into<String>) {
        self.documents
            .insert(document_id.into(), MemoryDocument::new());
    }

    /// Every batch applied to the document, in order.
    pub fn batches(&self, document_id: &str) -> Result<&[Vec<Operation>], StoreError> {
        Ok(&self.document(document_id)?.batches)
    }

    pub fn mode(&self, document_id: &str) -> Result<DocumentMode, StoreError> {
        Ok(self.document(document_id)?.mode)
    }

    /// Length of the body in document units.
    pub fn len(&self, document_id: &str) -> Result<usize, StoreError> {
        Ok(self.document(document_id)?.len())
    }

    /// The body as readable text. Tables become pipe rows and page breaks
    /// a marker line of their own.
    pub fn render(&self, document_id: &str) -> Result<String, StoreError> {
        let doc = self.document(document_id)?;
        let mut out = String::new();
        for el in scan_body(&doc.rope.to_string()) {
            match &el.content {
                ElementContent::SectionBreak => {}
                ElementContent::Paragraph(p) => {
                    out.push_str(&p.text().replace(PAGE_BREAK, "<page break>\n"));
                }
                ElementContent::Table(table) => {
                    for row in &table.rows {
                        let cells: Vec<String> = row
                            .cells
                            .iter()
                            .map(|c| c.text().trim_end().replace('\n', " "))
                            .collect();
                        out.push_str(&format!("| {} |\n", cells.join(" | ")));
                    }
                }
            }
        }
        Ok(out)
    }

    fn document(&self, document_id: &str) -> Result<&MemoryDocument, StoreError> {
        self.documents
            .get(document_id)
            .ok_or_else(|| StoreError::NotFound(document_id.to_string()))
    }
}

impl DocumentStore for MemoryStore {
    fn apply_batch(&mut self, document_id: &str, ops: &[Operation]) -> Result<(), StoreError> {
        let doc = self
            .documents
            .get_mut(document_id)
            .ok_or_else(|| StoreError::NotFound(document_id.to_string()))?;

        let mut draft = doc.clone();
        for (index, op) in ops.iter().enumerate() {
            draft
                .apply(op)
                .map_err(|reason| StoreError::Rejected { index, reason })?;
        }
        draft.batches.push(ops.to_vec());
        *doc = draft;

        log::debug!(
            "applied batch of {} operations to {document_id}, body length {}",
            ops.len(),
            doc.len()
        );
        Ok(())
    }

    fn fetch_structure(&self, document_id: &str) -> Result<DocumentTree, StoreError> {
        let doc = self.document(document_id)?;
        Ok(DocumentTree {
            document_id: document_id.to_string(),
            body: scan_body(&doc.rope.to_string()),
        })
    }
}

impl MemoryDocument {
    fn new() -> Self {
        Self {
            rope: Rope::from(format!("{SECTION_BREAK}\n")),
            mode: DocumentMode::Pageless,
            batches: vec![],
        }
    }

    fn len(&self) -> usize {
        self.rope.measure::<Utf16CodeUnitsMetric>()
    }

    fn body(&self) -> Vec<StructuralElement> {
        scan_body(&self.rope.to_string())
    }

    fn apply(&mut self, op: &Operation) -> Result<(), String> {
        match op {
            Operation::InsertText { at, text } => {
                if text.is_empty() {
                    return Err("empty insertion".into());
                }
                self.require_paragraph_at(*at, false)?;
                self.splice(Span::new(*at, *at), &escape_reserved(text))
            }
            Operation::InsertPageBreak { at } => {
                self.require_paragraph_at(*at, true)?;
                self.splice(Span::new(*at, *at), &PAGE_BREAK.to_string())
            }
            Operation::DeleteRange { range } => {
                self.check_delete(*range)?;
                self.splice(*range, "")
            }
            Operation::InsertTableGrid { at, rows, columns } => {
                if *rows == 0 || *columns == 0 {
                    return Err(format!("table must have cells, got {rows}x{columns}"));
                }
                self.require_paragraph_at(*at, true)?;
                self.splice(Span::new(*at, *at), &empty_grid(*rows, *columns))
            }
            Operation::SetParagraphStyle { range, .. }
            | Operation::SetTextStyle { range, .. }
            | Operation::CreateListRun { range, .. } => self.check_range(*range),
            Operation::StyleTableCell {
                table_start,
                row,
                column,
                ..
            } => {
                let body = self.body();
                let table = body
                    .iter()
                    .find(|el| el.start == *table_start)
                    .and_then(StructuralElement::as_table)
                    .ok_or_else(|| format!("no table starts at {table_start}"))?;
                table
                    .cell(*row, *column)
                    .map(|_| ())
                    .ok_or_else(|| format!("table at {table_start} has no cell ({row}, {column})"))
            }
            Operation::SetDocumentMode { mode } => {
                self.mode = *mode;
                Ok(())
            }
        }
    }

    fn check_range(&self, range: Span) -> Result<(), String> {
        if range.is_empty() {
            return Err(format!("empty range {}..{}", range.start, range.end));
        }
        if range.end > self.len() {
            return Err(format!(
                "range {}..{} is past the end ({})",
                range.start,
                range.end,
                self.len()
            ));
        }
        Ok(())
    }

    /// `at` must fall inside a paragraph, which rules out every marker.
    fn require_paragraph_at(&self, at: usize, top_level: bool) -> Result<(), String> {
        let body = self.body();
        let in_paragraph = |els: &[StructuralElement]| {
            els.iter()
                .any(|el| el.as_paragraph().is_some() && el.start <= at && at < el.end)
        };
        if in_paragraph(body.as_slice()) {
            return Ok(());
        }
        let in_cell = body
            .iter()
            .filter_map(StructuralElement::as_table)
            .flat_map(|t| t.rows.iter())
            .flat_map(|r| r.cells.iter())
            .any(|c| in_paragraph(c.content.as_slice()));
        match (in_cell, top_level) {
            (true, false) => Ok(()),
            (true, true) => Err(format!("offset {at} is inside a table")),
            (false, _) => Err(format!("offset {at} is not inside a paragraph")),
        }
    }

    fn check_delete(&self, range: Span) -> Result<(), String> {
        let len = self.len();
        if range.start < 1 || range.is_empty() || range.end >= len {
            return Err(format!(
                "cannot delete {}..{} from a body of length {len}",
                range.start, range.end
            ));
        }
        for el in self.body() {
            let Some(table) = el.as_table() else {
                continue;
            };
            let span = el.span();
            if range.end == span.start {
                return Err(format!("would join a paragraph to the table at {}", span.start));
            }
            if range.end <= span.start || range.start >= span.end || span.within(range) {
                continue;
            }
            let in_one_cell = table
                .rows
                .iter()
                .flat_map(|r| r.cells.iter())
                .any(|c| c.start < range.start && range.end < c.end);
            if !in_one_cell {
                return Err(format!("partial deletion of the table at {}", span.start));
            }
        }
        Ok(())
    }

    fn splice(&mut self, range: Span, text: &str) -> Result<(), String> {
        let start = self.byte_offset(range.start)?;
        let end = self.byte_offset(range.end)?;

        let mut builder = Builder::new(self.rope.len());
        if text.is_empty() {
            builder.delete(start..end);
        } else {
            builder.replace(start..end, Rope::from(text));
        }
        self.rope = builder.build().apply(&self.rope);
        Ok(())
    }

    fn byte_offset(&self, units: usize) -> Result<usize, String> {
        if units > self.len() {
            return Err(format!("offset {units} is past the end ({})", self.len()));
        }
        let byte = self.rope.count_base_units::<Utf16CodeUnitsMetric>(units);
        if self.rope.count::<Utf16CodeUnitsMetric>(byte) != units {
            return Err(format!("offset {units} splits a character"));
        }
        Ok(byte)
    }
}

/// A newline to stand before the table, then the table itself with one
/// empty paragraph per cell.
/// Swaps marker characters for a one-unit stand-in so offsets are kept.
fn escape_reserved(text: &str) -> String {
    if !text.chars().any(is_reserved) {
        return text.to_string();
    }
    log::debug!("replacing reserved characters in inserted text");
    text.chars()
        .map(|c| if is_reserved(c) { REPLACEMENT_CHARACTER } else { c })
        .collect()
}

fn empty_grid(rows: usize, columns: usize) -> String {
    let mut grid = String::from("\n");
    grid.push(TABLE_START);
    for _ in 0..rows {
        grid.push(ROW_START);
        for _ in 0..columns {
            grid.push(CELL_START);
            grid.push('\n');
        }
    }
    grid.push(TABLE_END);
    grid
}

fn scan_body(text: &str) -> Vec<StructuralElement> {
    let mut scanner = Scanner::new(text);
    let mut body = vec![];

    while let Some(c) = scanner.peek() {
        match c {
            SECTION_BREAK => {
                let start = scanner.pos;
                scanner.bump();
                body.push(StructuralElement {
                    start,
                    end: scanner.pos,
                    content: ElementContent::SectionBreak,
                });
            }
            TABLE_START => body.push(scanner.table()),
            c if ends_paragraph(c) => {
                // stray marker
                scanner.bump();
            }
            _ => body.push(scanner.paragraph()),
        }
    }
    body
}

/// Walks the body text counting document units.
struct Scanner<'t> {
    chars: std::iter::Peekable<std::str::Chars<'t>>,
    pos: usize,
}

impl<'t> Scanner<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            chars: text.chars().peekable(),
            pos: 0,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.pos += c.len_utf16();
        Some(c)
    }

    fn paragraph(&mut self) -> StructuralElement {
        let start = self.pos;
        let mut content = String::new();
        while let Some(c) = self.peek() {
            if ends_paragraph(c) {
                break;
            }
            self.bump();
            content.push(c);
            if c == '\n' {
                break;
            }
        }
        StructuralElement {
            start,
            end: self.pos,
            content: ElementContent::Paragraph(Paragraph {
                runs: vec![TextRun {
                    start,
                    end: self.pos,
                    content,
                }],
            }),
        }
    }

    fn table(&mut self) -> StructuralElement {
        let start = self.pos;
        self.bump();
        let mut rows = vec![];
        while let Some(c) = self.peek() {
            match c {
                ROW_START => rows.push(self.row()),
                TABLE_END => {
                    self.bump();
                    break;
                }
                _ => {
                    self.bump();
                }
            }
        }
        StructuralElement {
            start,
            end: self.pos,
            content: ElementContent::Table(Table { rows }),
        }
    }

    fn row(&mut self) -> TableRow {
        let start = self.pos;
        self.bump();
        let mut cells = vec![];
        while self.peek() == Some(CELL_START) {
            cells.push(self.cell());
        }
        TableRow {
            start,
            end: self.pos,
            cells,
        }
    }

    fn cell(&mut self) -> TableCell {
        let start = self.pos;
        self.bump();
        let mut content = vec![];
        while let Some(c) = self.peek() {
            if ends_paragraph(c) {
                break;
            }
            content.push(self.paragraph());
        }
        TableCell {
            start,
            end: self.pos,
            content,
        }
    }
}
