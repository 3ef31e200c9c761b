//! Integration tests for the parsing module.
//!
//! Uses snapshot testing with a plain-text rendering for readability.
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.


use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{Block, ListKind},
    inline::{FormattedText, StyleRange},
    parse_markdown,
};

// Fixture-based snapshot tests

#[test]
fn fixture_basic() {
    assert_fixture("basic");
}

#[test]
fn fixture_kitchen_sink() {
    assert_fixture("kitchen_sink");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let blocks = parse_markdown(&md);
    invariants::check(&blocks);

    let snap = normalize::normalize(&blocks);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap);
    });
}

// Invariant tests

/// The worked example: blank lines vanish and list items stay adjacent.
#[test]
fn title_paragraph_and_list() {
    let blocks = parse_markdown("# Title\n\nSome **bold** text.\n- item one\n- item two\n");
    invariants::check(&blocks);

    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                level: 1,
                text: FormattedText::plain("Title"),
            },
            Block::Paragraph {
                text: FormattedText {
                    plain: "Some bold text.".into(),
                    ranges: vec![StyleRange {
                        start: 5,
                        end: 9,
                        bold: true,
                        italic: false,
                    }],
                },
            },
            Block::ListItem {
                kind: ListKind::Bullet,
                text: FormattedText::plain("item one"),
                nesting: 0,
            },
            Block::ListItem {
                kind: ListKind::Bullet,
                text: FormattedText::plain("item two"),
                nesting: 0,
            },
        ]
    );
}

/// Table cells keep their markup; only text-bearing blocks are formatted.
#[test]
fn table_cells_are_not_formatted() {
    let blocks = parse_markdown("| **A** | _b_ |\n| c | d |");
    let Block::Table(t) = &blocks[0] else {
        panic!("expected a table, got {:?}", blocks[0]);
    };
    assert_eq!(t.rows[0], vec!["**A**", "_b_"]);
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    assert!(parse_markdown("").is_empty());
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    assert!(parse_markdown("\n\n  \n\t\n").is_empty());
}

/// Windows line endings classify the same as Unix ones.
#[test]
fn crlf_input() {
    let unix = parse_markdown("# A\n- b\n| x | y |\n|---|---|\n| 1 | 2 |\n");
    let windows = parse_markdown("# A\r\n- b\r\n| x | y |\r\n|---|---|\r\n| 1 | 2 |\r\n");
    assert_eq!(unix, windows);
}

/// Page breaks are recognised even between list items.
#[test]
fn page_break_between_items() {
    let blocks = parse_markdown("1. a\n===\n2. b");
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[1], Block::PageBreak);
}
