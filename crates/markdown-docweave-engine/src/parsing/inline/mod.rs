//! # Inline Formatting
//!
//! Cursor-based emphasis scanning for every text-bearing block
//! (headings, paragraphs, list items).
//!
//! ## Modules
//!
//! - **`types`**: `StyleRange` and `FormattedText`
//! - **`kinds`**: Emphasis delimiters with owned constants
//! - **`cursor`**: `Cursor` for byte-wise delimiter matching over UTF-8 text
//! - **`parser`**: `format()` main entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! Longest delimiter first: `***text***` is bold+italic, never bold around
//! a literal `*`. Emphasis does not nest, and an unclosed delimiter is kept
//! as literal text rather than reported.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::format;
pub use types::{FormattedText, StyleRange};
