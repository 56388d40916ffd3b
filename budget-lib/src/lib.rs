//! Budget Manager core library
//!
//! Toolkit-independent pieces of the Budget Manager: the searchable choice
//! field, the surfaces it drives, sample catalogs and user settings.

pub mod catalog;
pub mod error;
pub mod field;
pub mod geometry;
pub mod settings;

pub use catalog::Catalog;
pub use field::{
    DropdownState, FilterMatch, FilterableChoiceField, InputSurface, Placement, SelectionSurface,
    normalize, prefix_filter,
};
pub use geometry::Rect;
pub use settings::Settings;
