/// Page break block type with owned token constant.
pub struct PageBreak;

impl PageBreak {
    /// A line consisting of exactly this token (surrounding whitespace
    /// ignored) forces a new page.
    pub const TOKEN: &'static str = "===";

    pub fn matches(trimmed: &str) -> bool {
        trimmed == Self::TOKEN
    }
}
