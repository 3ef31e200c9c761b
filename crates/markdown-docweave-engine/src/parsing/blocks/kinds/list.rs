use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::types::ListKind;

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[-*+]\s+(.*)$").expect("bullet pattern is valid"));
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)\d+\.\s+(.*)$").expect("numbered pattern is valid"));

/// List item markers and the indentation width of one nesting level.
pub struct ListMarker;

impl ListMarker {
    /// Leading whitespace characters per nesting level of a bullet item.
    pub const BULLET_INDENT: usize = 2;
    /// Leading whitespace characters per nesting level of a numbered item
    /// (`1. ` is three wide).
    pub const NUMBERED_INDENT: usize = 3;

    /// Matches a bullet item first, then a numbered item.
    pub fn parse(line: &str) -> Option<ListMatch<'_>> {
        Self::parse_kind(line, &BULLET, ListKind::Bullet, Self::BULLET_INDENT).or_else(|| {
            Self::parse_kind(line, &NUMBERED, ListKind::Numbered, Self::NUMBERED_INDENT)
        })
    }

    fn parse_kind<'a>(
        line: &'a str,
        re: &Regex,
        kind: ListKind,
        indent_width: usize,
    ) -> Option<ListMatch<'a>> {
        let caps = re.captures(line)?;
        let indent = caps.get(1).map_or(0, |m| m.as_str().chars().count());
        let text = caps.get(2).map_or("", |m| m.as_str());
        Some(ListMatch {
            kind,
            nesting: indent / indent_width,
            text,
        })
    }
}

/// A line recognised as a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMatch<'a> {
    pub kind: ListKind,
    pub nesting: usize,
    /// Item text after the marker, untrimmed.
    pub text: &'a str,
}
