//! Markdown to rich-text document compiler.
//!
//! The engine parses a restricted Markdown dialect into blocks, compiles
//! them into positional edit operations against a remote rich-text
//! document, and drives tables through the multi-step protocol the store
//! requires. Everything talks to the store through [`DocumentStore`].

pub mod brand;
pub mod compile;
pub mod ops;
pub mod parsing;
pub mod publish;
pub mod span;
pub mod store;
pub mod table;

pub use brand::BrandConfig;
pub use compile::{CompiledSegment, compile, merge_runs};
pub use ops::Operation;
pub use parsing::{blocks::Block, inline::format, parse_markdown};
pub use publish::{PublishReport, populate_document, publish};
pub use span::Span;
pub use store::{DocumentStore, DocumentTree, MemoryStore, StoreError};
pub use table::{TableOutcome, materialize};
