use super::Vec2;

/// Axis-aligned box in logical pixels, stored as its two extreme corners.
///
/// `Rect::default()` is the empty box at the origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Box with top-left `(x, y)` and size `w × h`. Negative sizes are flipped.
    #[inline]
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::spanning(Vec2::new(x, y), Vec2::new(x + w, y + h))
    }

    /// Box spanning two corners given in any order.
    #[inline]
    pub fn spanning(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Smallest box covering both.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        Self::spanning(
            Vec2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            Vec2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_size_is_flipped() {
        let rect = Rect::new(10.0, 0.0, -4.0, 5.0);
        assert_eq!(rect.min, Vec2::new(6.0, 0.0));
        assert_eq!(rect.width(), 4.0);
    }

    #[test]
    fn center_is_midpoint() {
        assert_eq!(Rect::new(0.0, 10.0, 20.0, 40.0).center(), Vec2::new(10.0, 30.0));
    }

    #[test]
    fn union_covers_both() {
        let u = Rect::new(0.0, 0.0, 5.0, 5.0).union(Rect::new(10.0, -2.0, 5.0, 5.0));
        assert_eq!(u, Rect::new(0.0, -2.0, 15.0, 7.0));
    }

    #[test]
    fn degenerate_boxes_are_empty() {
        assert!(Rect::default().is_empty());
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Rect::new(0.0, 0.0, f32::NAN, 5.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
