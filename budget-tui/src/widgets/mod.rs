//! Terminal widgets backing the choice field surfaces.

pub mod entry;
pub mod popup;

pub use entry::{EditResult, Entry};
pub use popup::Popup;
