/// Emphasis delimiters. Both marker families behave identically.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    pub const BOLD_ITALIC: [&'static str; 2] = ["***", "___"];
    pub const BOLD: [&'static str; 2] = ["**", "__"];
    pub const ITALIC: [&'static str; 2] = ["*", "_"];

    /// Whether `b` belongs to either marker family.
    pub fn is_marker(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }
}

/// Which style a matched delimiter pair applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    BoldItalic,
    Bold,
    Italic,
}

impl EmphasisKind {
    /// Tried in this order; the longest delimiter wins.
    pub const PRECEDENCE: [EmphasisKind; 3] = [
        EmphasisKind::BoldItalic,
        EmphasisKind::Bold,
        EmphasisKind::Italic,
    ];

    pub fn delimiters(self) -> [&'static str; 2] {
        match self {
            EmphasisKind::BoldItalic => Emphasis::BOLD_ITALIC,
            EmphasisKind::Bold => Emphasis::BOLD,
            EmphasisKind::Italic => Emphasis::ITALIC,
        }
    }

    pub fn bold(self) -> bool {
        matches!(self, EmphasisKind::BoldItalic | EmphasisKind::Bold)
    }

    pub fn italic(self) -> bool {
        matches!(self, EmphasisKind::BoldItalic | EmphasisKind::Italic)
    }
}
