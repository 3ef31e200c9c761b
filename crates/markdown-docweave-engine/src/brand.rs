use serde::Deserialize;

use crate::ops::Rgb;

/// Typography and colours applied to a compiled document.
///
/// Supplied once per compilation and never mutated. Fields that are absent
/// leave the template's own styling in place.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BrandConfig {
    /// Inline overrides per heading level.
    #[serde(default)]
    pub headings: Vec<HeadingStyle>,
    /// Inline override for paragraphs and list items.
    #[serde(default)]
    pub body: Option<BodyStyle>,
    /// Paragraph spacing for templates that define none.
    #[serde(default)]
    pub spacing: Option<BodySpacing>,
    #[serde(default)]
    pub table: TableStyle,
}

impl BrandConfig {
    pub fn heading(&self, level: u8) -> Option<&HeadingStyle> {
        self.headings.iter().find(|h| h.level == level)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeadingStyle {
    pub level: u8,
    pub font: String,
    pub size: f32,
    #[serde(default)]
    pub bold: bool,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BodyStyle {
    pub font: String,
    pub size: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BodySpacing {
    /// Points above each paragraph.
    pub space_above: f32,
    /// Percentage, 100 being single spacing.
    pub line_spacing: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableStyle {
    pub header_background: Rgb,
    pub header_text: Rgb,
    /// Tint for the first column of data rows.
    #[serde(default)]
    pub row_header_background: Option<Rgb>,
    pub body_text: Rgb,
    pub font: String,
    pub font_size: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header_background: Rgb::new(0.85, 0.85, 0.85),
            header_text: Rgb::BLACK,
            row_header_background: None,
            body_text: Rgb::new(0.2, 0.2, 0.2),
            font: "Arial".to_string(),
            font_size: 10.0,
        }
    }
}
