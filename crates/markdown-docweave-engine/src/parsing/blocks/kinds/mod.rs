pub mod heading;
pub mod list;
pub mod page_break;
pub mod rule;
pub mod table;

pub use heading::Heading;
pub use list::{ListMarker, ListMatch};
pub use page_break::PageBreak;
pub use rule::HorizontalRule;
pub use table::TablePipe;
