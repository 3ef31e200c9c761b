//! # Operation Compiler
//!
//! Walks a block sequence with a single cursor into the document's
//! coordinate space and emits two operation lists:
//!
//! - **structural**: text insertion, paragraph styles, page breaks and list
//!   creation, in document order
//! - **styles**: character styling, applied only after every structural
//!   operation of the same segment has landed, so ranges are computed
//!   against final offsets
//!
//! Tables cannot be expressed as flat text. The compiler leaves a one-unit
//! placeholder for each and records where it is; the table materializer
//! replaces it later through round trips to the store.
//!
//! ## Modules
//!
//! - **`compiler`**: `compile()` and the per-block emission rules
//! - **`list_runs`**: `merge_runs()` coalesces adjacent list item spans
//! - **`segments`**: splits a block list into text and table segments

pub mod compiler;
pub mod list_runs;
pub mod segments;

pub use compiler::{CompiledSegment, LINE_TERMINATOR, TablePlaceholder, compile};
pub use list_runs::merge_runs;
pub use segments::{Segment, segments};
