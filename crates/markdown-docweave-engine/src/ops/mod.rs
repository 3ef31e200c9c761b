//! # Operations
//!
//! The positional edit operations the compiler emits. Every offset is
//! absolute and only valid when operations are applied in emitted order
//! against the document state the compiler assumed.

pub mod operation;
pub mod style;

pub use operation::{DocumentMode, ListPreset, Operation};
pub use style::{CellStyle, NamedStyle, Padding, ParagraphStyle, Rgb, TextStyle};
