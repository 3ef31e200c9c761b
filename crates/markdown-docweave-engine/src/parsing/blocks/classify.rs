use super::kinds::{Heading, HorizontalRule, ListMarker, ListMatch, PageBreak, TablePipe};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether a line continues an
/// open table depends on context, so the classifier only records
/// `has_pipe` and leaves the decision to the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// The raw line without its terminator.
    pub line: &'a str,
    /// Whether the line contains a table pipe anywhere.
    pub has_pipe: bool,
    /// What the line would be if it stood alone.
    pub kind: LineKind<'a>,
}

/// Standalone meaning of a line, in classification precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Whitespace only. Never produces a block.
    Blank,
    PageBreak,
    /// A horizontal rule. Dropped.
    Rule,
    Heading {
        level: u8,
        text: &'a str,
    },
    /// First row of a pipe table.
    TableStart,
    ListItem(ListMatch<'a>),
    /// Anything else; `text` is the trimmed line.
    Paragraph {
        text: &'a str,
    },
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`]. First matching rule wins.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim();

        let kind = if trimmed.is_empty() {
            LineKind::Blank
        } else if PageBreak::matches(trimmed) {
            LineKind::PageBreak
        } else if HorizontalRule::matches(trimmed) {
            LineKind::Rule
        } else if let Some((level, text)) = Heading::parse(line) {
            LineKind::Heading {
                level,
                text: text.trim(),
            }
        } else if TablePipe::opens(trimmed) {
            LineKind::TableStart
        } else if let Some(item) = ListMarker::parse(line) {
            LineKind::ListItem(ListMatch {
                text: item.text.trim(),
                ..item
            })
        } else {
            LineKind::Paragraph { text: trimmed }
        };

        LineClass {
            line,
            has_pipe: TablePipe::continues(line),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::types::ListKind;
    use pretty_assertions::assert_eq;

    fn kind(line: &str) -> LineKind<'_> {
        MarkdownLineClassifier.classify(line).kind
    }

    #[test]
    fn blank_lines() {
        assert_eq!(kind(""), LineKind::Blank);
        assert_eq!(kind("   \t"), LineKind::Blank);
        assert_eq!(kind("\r"), LineKind::Blank);
    }

    #[test]
    fn page_break_beats_everything() {
        assert_eq!(kind("  ===  "), LineKind::PageBreak);
    }

    #[test]
    fn rule_beats_list_item() {
        assert_eq!(kind("***"), LineKind::Rule);
        assert_eq!(kind("---"), LineKind::Rule);
    }

    #[test]
    fn heading_text_is_trimmed() {
        assert_eq!(
            kind("## Hello world  \r"),
            LineKind::Heading {
                level: 2,
                text: "Hello world"
            }
        );
    }

    #[test]
    fn table_start_needs_two_pipes() {
        assert_eq!(kind("| a | b |"), LineKind::TableStart);
        assert_eq!(kind("| lonely"), LineKind::Paragraph { text: "| lonely" });
    }

    #[test]
    fn list_item_text_is_trimmed() {
        assert_eq!(
            kind("  - nested item  "),
            LineKind::ListItem(ListMatch {
                kind: ListKind::Bullet,
                nesting: 1,
                text: "nested item"
            })
        );
    }

    #[test]
    fn paragraph_is_trimmed() {
        assert_eq!(
            kind("   plain words "),
            LineKind::Paragraph {
                text: "plain words"
            }
        );
    }

    #[test]
    fn has_pipe_is_recorded_for_any_kind() {
        let c = MarkdownLineClassifier.classify("- a | b");
        assert!(c.has_pipe);
        assert!(matches!(c.kind, LineKind::ListItem(_)));
    }
}
