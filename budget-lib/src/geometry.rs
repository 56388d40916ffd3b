//! Cell-based rectangles used for anchoring and hit testing.

/// A rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// First column past the right edge.
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// First row past the bottom edge.
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Cut this rectangle down so it fits inside `bounds`.
    ///
    /// Returns an empty rect positioned at the origin of the overlap when the
    /// two do not intersect.
    pub fn clamp_to(self, bounds: Rect) -> Self {
        let x = self.x.max(bounds.x);
        let y = self.y.max(bounds.y);
        let right = self.right().min(bounds.right());
        let bottom = self.bottom().min(bounds.bottom());
        Self {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 4));
        assert!(!rect.contains(6, 4));
        assert!(!rect.contains(5, 5));
        assert!(!rect.contains(1, 3));
    }

    #[test]
    fn test_clamp_to_partial_overlap() {
        let bounds = Rect::new(0, 0, 10, 10);
        assert_eq!(Rect::new(8, 7, 5, 5).clamp_to(bounds), Rect::new(8, 7, 2, 3));
        assert_eq!(Rect::new(1, 1, 2, 2).clamp_to(bounds), Rect::new(1, 1, 2, 2));
    }

    #[test]
    fn test_clamp_to_disjoint_is_empty() {
        let clamped = Rect::new(20, 20, 5, 5).clamp_to(Rect::new(0, 0, 10, 10));
        assert!(clamped.is_empty());
    }
}
