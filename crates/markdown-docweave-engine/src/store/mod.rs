//! # Document Store
//!
//! The collaborator that owns the target document. The pipeline only ever
//! talks to it in whole batches: a batch is applied in order and either
//! lands completely or not at all.
//!
//! ## Modules
//!
//! - **`tree`**: `DocumentTree`, the read-back structure used to discover
//!   where tables and their cells actually ended up
//! - **`memory`**: `MemoryStore`, an in-process store over `xi_rope::Rope`

pub mod memory;
pub mod tree;

pub use memory::MemoryStore;
pub use tree::{
    DocumentTree, ElementContent, Paragraph, StructuralElement, Table, TableCell, TableRow,
    TextRun,
};

use thiserror::Error;

use crate::ops::Operation;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("operation {index} rejected: {reason}")]
    Rejected { index: usize, reason: String },

    /// The request never reached a remote backend or its reply was
    /// unreadable. [`MemoryStore`] does not produce it.
    #[error("store transport failed: {0}")]
    Transport(String),
}

/// A rich-text document service addressed by absolute offsets.
pub trait DocumentStore {
    /// Applies `ops` in order as one atomic batch.
    fn apply_batch(&mut self, document_id: &str, ops: &[Operation]) -> Result<(), StoreError>;

    /// Reads back the current structure of the document body.
    fn fetch_structure(&self, document_id: &str) -> Result<DocumentTree, StoreError>;
}
