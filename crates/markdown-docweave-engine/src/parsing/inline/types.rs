use serde::Serialize;

/// A run of text marked bold and/or italic.
///
/// Offsets are relative to the start of the owning [`FormattedText::plain`]
/// and measured in document units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleRange {
    pub start: usize,
    pub end: usize,
    pub bold: bool,
    pub italic: bool,
}

/// Text with its emphasis delimiters stripped, plus where they applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormattedText {
    /// The text as it will be inserted into the document.
    pub plain: String,
    /// Non-overlapping ranges ordered by start.
    pub ranges: Vec<StyleRange>,
}

impl FormattedText {
    /// Text with no emphasis at all.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain: text.into(),
            ranges: vec![],
        }
    }
}
