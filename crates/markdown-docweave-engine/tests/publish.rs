use markdown_docweave_engine::{
    BrandConfig, DocumentStore, DocumentTree, MemoryStore, Operation, StoreError,
    ops::DocumentMode, parse_markdown, populate_document, publish, store::ElementContent,
};
use pretty_assertions::assert_eq;

const DOC: &str = "report";

fn fresh() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.create(DOC);
    store
}

#[test]
fn publishes_headings_paragraphs_and_lists() {
    let mut store = fresh();
    let md = "# Title\n\nSome **bold** text.\n- item one\n- item two\n";
    let report = publish(&mut store, DOC, md, &BrandConfig::default()).unwrap();

    assert_eq!(report.blocks, 4);
    assert_eq!(report.tables, 0);
    assert_eq!(report.end_offset, 41);
    assert_eq!(
        store.render(DOC).unwrap(),
        "Title\nSome bold text.\nitem one\nitem two\n\n"
    );

    // mode, structure, styles; nothing to clear in a fresh document
    let batches = store.batches(DOC).unwrap();
    assert_eq!(batches.len(), 3);
    assert_eq!(
        batches[0],
        vec![Operation::SetDocumentMode {
            mode: DocumentMode::Pages
        }]
    );
    assert_eq!(store.mode(DOC).unwrap(), DocumentMode::Pages);
}

#[test]
fn table_between_paragraphs() {
    let mut store = fresh();
    let md = "# Report\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\nAfter the table.\n";
    let report = publish(&mut store, DOC, md, &BrandConfig::default()).unwrap();

    assert_eq!(report.tables, 1);
    assert_eq!(report.degraded_tables, 0);
    assert_eq!(report.end_offset, 42);
    assert_eq!(
        store.render(DOC).unwrap(),
        "Report\n\n| A | B |\n| 1 | 2 |\nAfter the table.\n\n"
    );
}

#[test]
fn private_use_markers_in_source_are_published_as_replacement_characters() {
    let mut store = fresh();
    let md = "Odd \u{E001} marker\n\n| x | \u{E003} |\n";
    let report = publish(&mut store, DOC, md, &BrandConfig::default()).unwrap();

    assert_eq!(report.tables, 1);
    assert_eq!(report.degraded_tables, 0);
    assert_eq!(report.end_offset, store.len(DOC).unwrap() - 1);
    assert_eq!(
        store.render(DOC).unwrap(),
        "Odd \u{FFFD} marker\n\n| x | \u{FFFD} |\n\n"
    );
}

#[test]
fn adjacent_tables_at_document_edges() {
    let mut store = fresh();
    let md = "| a | b |\n\n| c | d |\n";
    let report = publish(&mut store, DOC, md, &BrandConfig::default()).unwrap();

    assert_eq!(report.tables, 2);
    assert_eq!(
        store.render(DOC).unwrap(),
        "\n| a | b |\n\n| c | d |\n\n"
    );

    let tree = store.fetch_structure(DOC).unwrap();
    assert_eq!(tree.tables().count(), 2);
    assert_eq!(report.end_offset, tree.end_offset() - 1);
}

#[test]
fn republishing_replaces_previous_body() {
    let mut store = fresh();
    let brand = BrandConfig::default();
    let md = "intro\n\n| x | y |\n| 1 | 2 |\n\n===\n\n1. one\n2. two\n";

    publish(&mut store, DOC, md, &brand).unwrap();
    let first = store.render(DOC).unwrap();
    publish(&mut store, DOC, md, &brand).unwrap();

    assert_eq!(store.render(DOC).unwrap(), first);
    assert!(first.contains("<page break>"));
}

#[test]
fn populate_appends_after_existing_content() {
    let mut store = fresh();
    store
        .apply_batch(DOC, &[Operation::insert_text(1, "Existing\n")])
        .unwrap();

    let blocks = parse_markdown("more\n");
    let end = populate_document(&mut store, DOC, &blocks, &BrandConfig::default(), 10).unwrap();

    assert_eq!(end, 15);
    assert_eq!(store.render(DOC).unwrap(), "Existing\nmore\n\n");
}

#[test]
fn every_style_lands_inside_the_body() {
    let mut store = fresh();
    let md = "# **Big** title\n\n- a *b* c\n  - nested\n\n| H | I |\n|---|---|\n| **x** | y |\n\ntail _end_\n";
    publish(&mut store, DOC, md, &BrandConfig::default()).unwrap();

    let len = store.len(DOC).unwrap();
    for batch in store.batches(DOC).unwrap() {
        for op in batch {
            if let Some(range) = op.style_range() {
                assert!(!range.is_empty() && range.end <= len, "{op:?}");
            }
        }
    }
    let tree = store.fetch_structure(DOC).unwrap();
    assert!(
        tree.body
            .iter()
            .any(|el| matches!(el.content, ElementContent::Table(_)))
    );
}

#[test]
fn missing_document_is_reported() {
    let mut store = MemoryStore::new();
    let err = publish(&mut store, "nowhere", "text\n", &BrandConfig::default()).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

/// A remote backend that cannot be reached.
struct OfflineStore;

impl DocumentStore for OfflineStore {
    fn apply_batch(&mut self, _: &str, _: &[Operation]) -> Result<(), StoreError> {
        Err(StoreError::Transport("connection refused".into()))
    }

    fn fetch_structure(&self, _: &str) -> Result<DocumentTree, StoreError> {
        Err(StoreError::Transport("connection refused".into()))
    }
}

#[test]
fn transport_failures_abort_publishing() {
    let err = publish(&mut OfflineStore, DOC, "# Title\n", &BrandConfig::default()).unwrap_err();
    assert!(matches!(err, StoreError::Transport(_)));
    assert_eq!(err.to_string(), "store transport failed: connection refused");
}

#[test]
fn empty_markdown_leaves_empty_body() {
    let mut store = fresh();
    let report = publish(&mut store, DOC, "\n\n   \n", &BrandConfig::default()).unwrap();
    assert_eq!(report.blocks, 0);
    assert_eq!(report.end_offset, 1);
    assert_eq!(store.render(DOC).unwrap(), "\n");
}
