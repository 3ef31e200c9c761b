//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: marker bytes `*` and `_`, and the delimiter sets for
//!   bold+italic (`***`, `___`), bold (`**`, `__`) and italic (`*`, `_`)
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `**` or `_`.

pub mod emphasis;

pub use emphasis::{Emphasis, EmphasisKind};
