/// Horizontal rules are recognised only so they can be dropped: branded
/// documents carry no visual dividers.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_LEN: usize = 3;

    /// A trimmed line made of one rule character repeated at least
    /// [`Self::MIN_LEN`] times.
    pub fn matches(trimmed: &str) -> bool {
        let mut chars = trimmed.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        Self::CHARS.contains(&first)
            && chars.all(|c| c == first)
            && trimmed.len() >= Self::MIN_LEN
    }
}
