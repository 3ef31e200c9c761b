use std::sync::LazyLock;

use regex::Regex;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("heading pattern is valid"));

/// ATX heading block type: one to six `#` followed by whitespace.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the heading level and the raw (untrimmed) heading text.
    ///
    /// Matched against the untrimmed line, so an indented `#` is not a
    /// heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let caps = HEADING.captures(line)?;
        let level = caps.get(1)?.as_str().len() as u8;
        let text = caps.get(2).map_or("", |m| m.as_str());
        Some((level, text))
    }
}
