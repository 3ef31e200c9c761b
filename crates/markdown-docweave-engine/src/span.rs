use serde::Serialize;

/// An offset range `[start, end)` in the target document's coordinate space.
///
/// Offsets count UTF-16 code units, the unit the rich-text document model
/// addresses content by. Use [`unit_len`] to measure text in the same unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in units. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Moves both ends forward by `by` units.
    #[must_use]
    pub fn shifted(self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }

    /// Whether `self` lies entirely within `outer`.
    pub fn within(self, outer: Span) -> bool {
        self.start >= outer.start && self.end <= outer.end
    }
}

/// Length of `text` in document units.
pub fn unit_len(text: &str) -> usize {
    text.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(3, 7).len(), 4);
        assert!(Span::new(5, 5).is_empty());
        assert!(Span::new(6, 5).is_empty());
    }

    #[test]
    fn shifted_moves_both_ends() {
        assert_eq!(Span::new(0, 4).shifted(10), Span::new(10, 14));
    }

    #[test]
    fn within_is_inclusive_of_bounds() {
        let outer = Span::new(1, 10);
        assert!(Span::new(1, 10).within(outer));
        assert!(Span::new(2, 3).within(outer));
        assert!(!Span::new(0, 3).within(outer));
        assert!(!Span::new(9, 11).within(outer));
    }

    #[test]
    fn unit_len_counts_utf16_code_units() {
        assert_eq!(unit_len("abc"), 3);
        assert_eq!(unit_len("é"), 1);
        // Astral plane characters take a surrogate pair.
        assert_eq!(unit_len("𝄞"), 2);
    }
}
