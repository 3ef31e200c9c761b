//! # Publish Pipeline
//!
//! Drives parse, compile and materialization against a [`DocumentStore`].
//! Segments are written one after another, each starting where the
//! previous one ended. A text segment costs two batches (structure, then
//! styling); a table costs its placeholder batch plus the materializer's
//! round trips.

use serde::Serialize;

use crate::{
    brand::BrandConfig,
    compile::{Segment, compile, segments},
    ops::{DocumentMode, Operation},
    parsing::{blocks::Block, parse_markdown},
    span::Span,
    store::{DocumentStore, StoreError},
    table::materialize,
};

/// Offset of the first insertable position in a document body.
pub const BODY_START: usize = 1;

/// What a publish run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    pub end_offset: usize,
    pub blocks: usize,
    pub tables: usize,
    /// Tables whose end offset had to be estimated.
    pub degraded_tables: usize,
}

/// Writes `blocks` into the document starting at `start` and returns the
/// offset just past the last written unit.
pub fn populate_document<S>(
    store: &mut S,
    document_id: &str,
    blocks: &[Block],
    brand: &BrandConfig,
    start: usize,
) -> Result<usize, StoreError>
where
    S: DocumentStore + ?Sized,
{
    populate(store, document_id, blocks, brand, start).map(|report| report.end_offset)
}

/// Replaces the body of the document with the rendering of `markdown`.
pub fn publish<S>(
    store: &mut S,
    document_id: &str,
    markdown: &str,
    brand: &BrandConfig,
) -> Result<PublishReport, StoreError>
where
    S: DocumentStore + ?Sized,
{
    clear_body(store, document_id)?;
    store.apply_batch(
        document_id,
        &[Operation::SetDocumentMode {
            mode: DocumentMode::Pages,
        }],
    )?;

    let blocks = parse_markdown(markdown);
    log::info!("parsed {} blocks", blocks.len());

    let report = populate(store, document_id, &blocks, brand, BODY_START)?;
    log::info!(
        "published {} blocks and {} tables to {document_id}, ending at {}",
        report.blocks,
        report.tables,
        report.end_offset
    );
    if report.degraded_tables > 0 {
        log::warn!(
            "{} tables could not be relocated; offsets after them are estimates",
            report.degraded_tables
        );
    }
    Ok(report)
}

/// Deletes everything between the section break and the final newline.
pub fn clear_body<S>(store: &mut S, document_id: &str) -> Result<(), StoreError>
where
    S: DocumentStore + ?Sized,
{
    let end = store.fetch_structure(document_id)?.end_offset();
    let last = end.saturating_sub(1);
    if last > BODY_START {
        log::info!("clearing {} units from {document_id}", last - BODY_START);
        store.apply_batch(
            document_id,
            &[Operation::DeleteRange {
                range: Span::new(BODY_START, last),
            }],
        )?;
    }
    Ok(())
}

fn populate<S>(
    store: &mut S,
    document_id: &str,
    blocks: &[Block],
    brand: &BrandConfig,
    start: usize,
) -> Result<PublishReport, StoreError>
where
    S: DocumentStore + ?Sized,
{
    let mut report = PublishReport {
        end_offset: start,
        blocks: blocks.len(),
        ..PublishReport::default()
    };

    for segment in segments(blocks) {
        match segment {
            Segment::Text(text) => {
                let compiled = compile(text, report.end_offset, brand);
                log::debug!(
                    "text segment of {} blocks: {} structural, {} style operations",
                    text.len(),
                    compiled.structural.len(),
                    compiled.styles.len()
                );
                if !compiled.structural.is_empty() {
                    store.apply_batch(document_id, &compiled.structural)?;
                }
                if !compiled.styles.is_empty() {
                    store.apply_batch(document_id, &compiled.styles)?;
                }
                report.end_offset = compiled.end_offset;
            }
            Segment::Table(index, table) => {
                let compiled = compile(&blocks[index..=index], report.end_offset, brand);
                store.apply_batch(document_id, &compiled.structural)?;

                let at = compiled
                    .tables
                    .first()
                    .map_or(report.end_offset, |placeholder| placeholder.offset);
                let outcome = materialize(store, document_id, table, at, brand)?;
                report.tables += 1;
                if outcome.is_estimated() {
                    report.degraded_tables += 1;
                }
                report.end_offset = outcome.end_offset();
            }
        }
    }
    Ok(report)
}
