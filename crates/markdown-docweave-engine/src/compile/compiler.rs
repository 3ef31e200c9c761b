use serde::Serialize;

use crate::{
    brand::BrandConfig,
    ops::{ListPreset, NamedStyle, Operation, ParagraphStyle, TextStyle},
    parsing::{
        blocks::{Block, ListKind},
        inline::FormattedText,
    },
    span::{Span, unit_len},
};

use super::list_runs::merge_runs;

/// Terminates every inserted paragraph. Also the table placeholder.
pub const LINE_TERMINATOR: &str = "\n";

/// Indent step for nested list items, in points.
const NEST_INDENT_START: f32 = 36.0;
const NEST_INDENT_FIRST_LINE: f32 = 18.0;

/// Where a table was left as a one-unit placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TablePlaceholder {
    /// Index of the table in the compiled block slice.
    pub block_index: usize,
    pub offset: usize,
}

/// The output of one compiler pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompiledSegment {
    /// Edits and paragraph-level operations, in application order.
    pub structural: Vec<Operation>,
    /// Character styling, applied after every structural operation.
    pub styles: Vec<Operation>,
    /// Offset just past the last inserted unit.
    pub end_offset: usize,
    pub tables: Vec<TablePlaceholder>,
}

/// Compiles `blocks` into operations that insert them at `start_offset`.
///
/// Pure: the same inputs always produce the same operations. Offsets in the
/// output assume the structural list is applied in order, against a
/// document where `start_offset` is a valid insertion point.
pub fn compile(blocks: &[Block], start_offset: usize, brand: &BrandConfig) -> CompiledSegment {
    let mut compiler = Compiler::new(start_offset, brand);
    for (index, block) in blocks.iter().enumerate() {
        compiler.push(index, block);
    }
    compiler.finish()
}

struct Compiler<'b> {
    brand: &'b BrandConfig,
    cursor: usize,
    structural: Vec<Operation>,
    styles: Vec<Operation>,
    tables: Vec<TablePlaceholder>,
    bullets: Vec<Span>,
    numbered: Vec<Span>,
}

impl<'b> Compiler<'b> {
    fn new(start_offset: usize, brand: &'b BrandConfig) -> Self {
        Self {
            brand,
            cursor: start_offset,
            structural: vec![],
            styles: vec![],
            tables: vec![],
            bullets: vec![],
            numbered: vec![],
        }
    }

    fn push(&mut self, index: usize, block: &Block) {
        match block {
            Block::Heading { level, text } => self.heading(*level, text),
            Block::Paragraph { text } => {
                self.body_line(text);
            }
            Block::ListItem {
                kind,
                text,
                nesting,
            } => self.list_item(*kind, text, *nesting),
            Block::Table(_) => {
                self.tables.push(TablePlaceholder {
                    block_index: index,
                    offset: self.cursor,
                });
                self.insert(LINE_TERMINATOR);
            }
            Block::PageBreak => {
                self.insert(LINE_TERMINATOR);
                self.structural
                    .push(Operation::InsertPageBreak { at: self.cursor });
                self.cursor += 1;
            }
        }
    }

    fn finish(mut self) -> CompiledSegment {
        for range in merge_runs(&self.bullets) {
            self.structural.push(Operation::CreateListRun {
                range,
                preset: ListPreset::BulletDiscCircleSquare,
            });
        }
        for range in merge_runs(&self.numbered) {
            self.structural.push(Operation::CreateListRun {
                range,
                preset: ListPreset::NumberedDecimalAlphaRoman,
            });
        }
        CompiledSegment {
            structural: self.structural,
            styles: self.styles,
            end_offset: self.cursor,
            tables: self.tables,
        }
    }

    fn heading(&mut self, level: u8, text: &FormattedText) {
        let line = self.insert_line(&text.plain);
        self.paragraph_style(line, ParagraphStyle::named(NamedStyle::Heading(level)));

        if let Some(h) = self.brand.heading(level) {
            let style = TextStyle {
                bold: Some(h.bold),
                font_family: Some(h.font.clone()),
                font_size_pt: Some(h.size),
                foreground: Some(h.color),
                ..TextStyle::default()
            };
            self.text_style(content(line), style);
        }
        self.inline(line.start, text);
    }

    /// Paragraph rules shared by plain paragraphs and list items.
    fn body_line(&mut self, text: &FormattedText) -> Span {
        let line = self.insert_line(&text.plain);
        self.paragraph_style(line, ParagraphStyle::named(NamedStyle::NormalText));

        if let Some(spacing) = self.brand.spacing {
            let style = ParagraphStyle {
                space_above_pt: Some(spacing.space_above),
                line_spacing_pct: Some(spacing.line_spacing),
                ..ParagraphStyle::default()
            };
            self.paragraph_style(line, style);
        }
        if let Some(body) = &self.brand.body {
            let style = TextStyle {
                font_family: Some(body.font.clone()),
                font_size_pt: Some(body.size),
                foreground: Some(body.color),
                ..TextStyle::default()
            };
            self.text_style(content(line), style);
        }
        self.inline(line.start, text);
        line
    }

    fn list_item(&mut self, kind: ListKind, text: &FormattedText, nesting: usize) {
        let line = self.body_line(text);

        if nesting > 0 {
            let depth = (nesting + 1) as f32;
            let style = ParagraphStyle {
                indent_start_pt: Some(NEST_INDENT_START * depth),
                indent_first_line_pt: Some(NEST_INDENT_FIRST_LINE * depth),
                ..ParagraphStyle::default()
            };
            self.paragraph_style(line, style);
        }
        match kind {
            ListKind::Bullet => self.bullets.push(line),
            ListKind::Numbered => self.numbered.push(line),
        }
    }

    /// Emits an insertion at the cursor and advances past it.
    fn insert(&mut self, text: &str) -> Span {
        let span = Span::new(self.cursor, self.cursor + unit_len(text));
        self.structural
            .push(Operation::insert_text(self.cursor, text));
        self.cursor = span.end;
        span
    }

    fn insert_line(&mut self, plain: &str) -> Span {
        self.insert(&format!("{plain}{LINE_TERMINATOR}"))
    }

    fn paragraph_style(&mut self, range: Span, style: ParagraphStyle) {
        if !range.is_empty() {
            self.structural
                .push(Operation::SetParagraphStyle { range, style });
        }
    }

    fn text_style(&mut self, range: Span, style: TextStyle) {
        if !range.is_empty() && !style.is_empty() {
            self.styles.push(Operation::SetTextStyle { range, style });
        }
    }

    fn inline(&mut self, base: usize, text: &FormattedText) {
        for r in &text.ranges {
            let style = TextStyle {
                bold: r.bold.then_some(true),
                italic: r.italic.then_some(true),
                ..TextStyle::default()
            };
            self.text_style(Span::new(r.start, r.end).shifted(base), style);
        }
    }
}

/// The line without its terminator.
fn content(line: Span) -> Span {
    Span::new(line.start, line.end.saturating_sub(unit_len(LINE_TERMINATOR)))
}
