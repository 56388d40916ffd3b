//! Surfaces a choice field drives.
//!
//! A field never touches widgets directly. The frontend hands it an input
//! surface (where the user types) and a selection surface (the popup list),
//! and the field keeps them in sync.

use crate::geometry::Rect;

/// The text entry a field reads from and writes chosen items into.
pub trait InputSurface {
    /// Current text content.
    fn text(&self) -> String;

    /// Replace the full text content.
    fn set_text(&mut self, text: &str);

    /// Rectangle the selection surface hangs from.
    fn anchor(&self) -> Rect;
}

/// The popup list showing the current matches.
pub trait SelectionSurface {
    /// Remove every row.
    fn clear(&mut self);

    /// Add a row at the end.
    fn append(&mut self, item: &str);

    /// Make the surface visible at `placement`.
    fn show(&mut self, placement: Placement);

    fn hide(&mut self);

    fn is_visible(&self) -> bool;

    /// Number of rows the surface wants when shown.
    fn rows(&self) -> u16;
}

/// Where a selection surface is drawn relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Area the surface occupies.
    pub area: Rect,
    /// Drawn above sibling content.
    pub raised: bool,
}

impl Placement {
    /// Directly below `anchor`, spanning its full width.
    pub fn below(anchor: Rect, rows: u16) -> Self {
        Self {
            area: Rect::new(anchor.x, anchor.bottom(), anchor.width, rows),
            raised: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_below_anchor() {
        let placement = Placement::below(Rect::new(4, 2, 30, 1), 5);
        assert_eq!(placement.area, Rect::new(4, 3, 30, 5));
        assert!(placement.raised);
    }
}
