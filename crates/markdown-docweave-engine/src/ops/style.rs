use serde::{Deserialize, Serialize};

/// An RGB colour with channels as fractions in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }
}

/// Paragraph styles defined by the document's template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedStyle {
    NormalText,
    /// Heading level 1 to 6.
    Heading(u8),
}

/// Paragraph-level properties. Only the fields that are set are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named: Option<NamedStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_above_pt: Option<f32>,
    /// Line spacing as a percentage, 100 being single spacing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing_pct: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_start_pt: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_first_line_pt: Option<f32>,
}

impl ParagraphStyle {
    pub fn named(style: NamedStyle) -> Self {
        Self {
            named: Some(style),
            ..Self::default()
        }
    }

    /// Names of the set fields, in the order the store expects a field mask.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = vec![];
        if self.named.is_some() {
            fields.push("named_style");
        }
        if self.space_above_pt.is_some() {
            fields.push("space_above");
        }
        if self.line_spacing_pct.is_some() {
            fields.push("line_spacing");
        }
        if self.indent_start_pt.is_some() {
            fields.push("indent_start");
        }
        if self.indent_first_line_pt.is_some() {
            fields.push("indent_first_line");
        }
        fields
    }
}

/// Character-level properties. Only the fields that are set are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size_pt: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Rgb>,
}

impl TextStyle {
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = vec![];
        if self.bold.is_some() {
            fields.push("bold");
        }
        if self.italic.is_some() {
            fields.push("italic");
        }
        if self.font_family.is_some() {
            fields.push("font_family");
        }
        if self.font_size_pt.is_some() {
            fields.push("font_size");
        }
        if self.foreground.is_some() {
            fields.push("foreground");
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

/// Inner cell padding in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Padding {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Padding {
    /// Padding of header cells.
    pub const HEADER: Padding = Padding {
        top: 4.0,
        bottom: 4.0,
        left: 5.0,
        right: 5.0,
    };
    /// Padding of data cells.
    pub const DATA: Padding = Padding {
        top: 3.0,
        bottom: 3.0,
        left: 5.0,
        right: 5.0,
    };
}

/// Table cell properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CellStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}
