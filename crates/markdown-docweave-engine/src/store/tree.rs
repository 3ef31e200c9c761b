use serde::Serialize;

use crate::span::Span;

/// The structure of a document body as reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentTree {
    pub document_id: String,
    pub body: Vec<StructuralElement>,
}

impl DocumentTree {
    /// Offset just past the last body element. 0 for an empty body.
    pub fn end_offset(&self) -> usize {
        self.body.last().map_or(0, |el| el.end)
    }

    /// The table whose start lies closest to `target`, if any lies within
    /// `tolerance` units of it. Ties go to the earlier table.
    pub fn find_table_near(&self, target: usize, tolerance: usize) -> Option<(Span, &Table)> {
        self.body
            .iter()
            .filter_map(|el| el.as_table().map(|t| (el.span(), t)))
            .filter(|(span, _)| span.start.abs_diff(target) <= tolerance)
            .min_by_key(|(span, _)| span.start.abs_diff(target))
    }

    pub fn tables(&self) -> impl Iterator<Item = (Span, &Table)> {
        self.body
            .iter()
            .filter_map(|el| el.as_table().map(|t| (el.span(), t)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralElement {
    pub start: usize,
    pub end: usize,
    pub content: ElementContent,
}

impl StructuralElement {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn as_table(&self) -> Option<&Table> {
        match &self.content {
            ElementContent::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match &self.content {
            ElementContent::Paragraph(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementContent {
    SectionBreak,
    Paragraph(Paragraph),
    Table(Table),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.content.as_str()).collect()
    }
}

/// Text with uniform styling. Includes the paragraph terminator when it is
/// the last run of its paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub start: usize,
    pub end: usize,
    pub content: String,
}

impl TextRun {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.rows.get(row)?.cells.get(column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub start: usize,
    pub end: usize,
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCell {
    pub start: usize,
    pub end: usize,
    /// Paragraphs of the cell. A fresh cell holds one empty paragraph.
    pub content: Vec<StructuralElement>,
}

impl TableCell {
    /// Where text typed into the cell lands.
    pub fn first_paragraph_offset(&self) -> usize {
        self.content.first().map_or(self.start + 1, |el| el.start)
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.content
            .iter()
            .filter_map(StructuralElement::as_paragraph)
            .flat_map(|p| p.runs.iter())
    }

    pub fn text(&self) -> String {
        self.text_runs().map(|r| r.content.as_str()).collect()
    }
}
