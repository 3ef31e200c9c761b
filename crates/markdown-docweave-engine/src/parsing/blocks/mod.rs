//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank, page break, rule, heading, table start, list item,
//!    paragraph, and whether it contains a pipe)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` turns classified lines into
//!    `Block`s, consuming multi-line tables and dropping blanks and rules
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `ListKind`, `TableBlock`)
//! - **`kinds`**: Block-specific types with owned syntax (Heading, ListMarker, TablePipe,
//!   PageBreak, HorizontalRule)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blank lines never appear in the output
//! - Every text-bearing block has been run through the inline formatter
//! - Table cell text is verbatim; no inline parsing inside tables

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::{Block, ListKind, TableBlock};
