/// A cursor for left-to-right inline scanning.
///
/// Delimiters are ASCII, so matching works on bytes; plain content is
/// consumed a whole `char` at a time so multi-byte text is never split.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`. Always on a char boundary.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the byte `n` positions ahead without advancing.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat.as_bytes())
    }

    /// Byte index of the next occurrence of `pat` at or after `from`.
    pub fn find_from(&self, from: usize, pat: &str) -> Option<usize> {
        self.s.get(from..)?.find(pat).map(|rel| from + rel)
    }

    /// Consumes one whole character.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.s[self.i..].chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Moves to byte index `to`, which must be a char boundary.
    pub fn jump_to(&mut self, to: usize) {
        self.i = to;
    }
}
