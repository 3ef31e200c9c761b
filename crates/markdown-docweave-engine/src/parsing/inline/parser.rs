use crate::span::unit_len;

use super::{
    cursor::Cursor,
    kinds::{Emphasis, EmphasisKind},
    types::{FormattedText, StyleRange},
};

/// Strips emphasis delimiters from `text` and records where they applied.
///
/// Scans left to right and greedily; emphasis does not nest. At each
/// position the delimiters are tried longest first (`***`/`___`, then
/// `**`/`__`, then `*`/`_`). A delimiter with no closing partner, or whose
/// pair would enclose nothing, is kept as literal text.
///
/// Range offsets refer to the returned plain text, never to the input.
pub fn format(text: &str) -> FormattedText {
    let mut cur = Cursor::new(text);
    let mut plain = String::with_capacity(text.len());
    let mut ranges = vec![];
    // Length of `plain` so far, in document units.
    let mut pos = 0;

    while !cur.eof() {
        if let Some((kind, inner)) = try_parse_emphasis(&mut cur) {
            let len = unit_len(inner);
            ranges.push(StyleRange {
                start: pos,
                end: pos + len,
                bold: kind.bold(),
                italic: kind.italic(),
            });
            plain.push_str(inner);
            pos += len;
            continue;
        }
        if let Some(c) = cur.bump_char() {
            plain.push(c);
            pos += c.len_utf16();
        }
    }

    FormattedText { plain, ranges }
}

/// Attempts every emphasis kind at the current position, in precedence order.
///
/// On success the cursor is left after the closing delimiter and the
/// enclosed text is returned. On failure the cursor is untouched.
fn try_parse_emphasis<'a>(cur: &mut Cursor<'a>) -> Option<(EmphasisKind, &'a str)> {
    EmphasisKind::PRECEDENCE
        .into_iter()
        .find_map(|kind| try_parse_delimited(cur, kind).map(|inner| (kind, inner)))
}

fn try_parse_delimited<'a>(cur: &mut Cursor<'a>, kind: EmphasisKind) -> Option<&'a str> {
    let marker = kind
        .delimiters()
        .into_iter()
        .find(|m| cur.starts_with(m))?;

    // A single marker directly followed by another marker character is the
    // start of a longer delimiter, not italic.
    if kind == EmphasisKind::Italic {
        match cur.peek_at(1) {
            Some(next) if !Emphasis::is_marker(next) => {}
            _ => return None,
        }
    }

    let inner_start = cur.i + marker.len();
    let close = cur.find_from(inner_start, marker)?;
    if close <= inner_start {
        return None;
    }

    let s = cur.s;
    cur.jump_to(close + marker.len());
    Some(&s[inner_start..close])
}
