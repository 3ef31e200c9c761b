//! # Table Materialization
//!
//! Tables cannot be inserted as text. The store has to build the grid
//! itself, and only afterwards can we learn where each cell landed. The
//! materializer replaces a compiled one-unit placeholder with a real table
//! through five sequential round trips:
//!
//! 1. delete the placeholder
//! 2. insert an empty grid
//! 3. fetch the structure and locate the new table and its cells
//! 4. fill the cells in one batch
//! 5. fetch again, relocate, and style cells and cell text
//!
//! ## Modules
//!
//! - **`state`**: `TableState`, `LocatedTable` and `TableOutcome`
//! - **`materializer`**: `materialize()` driving the state machine

pub mod materializer;
pub mod state;

pub use materializer::{RELOCATION_TOLERANCE, materialize};
pub use state::{LocatedCell, LocatedTable, TableOutcome, TableState};
