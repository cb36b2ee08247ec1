use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Arc commands use a `Rect` as the bounding box of the ellipse the arc lies on.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Shrinks every edge by `d`. The size never goes below zero.
    #[inline]
    pub fn inset(self, d: f32) -> Self {
        let w = (self.size.x - 2.0 * d).max(0.0);
        let h = (self.size.y - 2.0 * d).max(0.0);
        Rect::new(self.origin.x + d, self.origin.y + d, w, h)
    }

    /// Largest square anchored at the top-left corner of `self`.
    #[inline]
    pub fn leading_square(self) -> Self {
        let side = self.size.x.min(self.size.y).max(0.0);
        Rect::new(self.origin.x, self.origin.y, side, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_all_edges() {
        let inner = r(0.0, 0.0, 100.0, 80.0).inset(10.0);
        assert_eq!(inner, r(10.0, 10.0, 80.0, 60.0));
    }

    #[test]
    fn inset_clamps_to_zero() {
        let inner = r(0.0, 0.0, 10.0, 10.0).inset(20.0);
        assert_eq!(inner.size, Vec2::zero());
    }

    // ── leading_square ────────────────────────────────────────────────────

    #[test]
    fn leading_square_uses_shorter_side() {
        assert_eq!(r(5.0, 5.0, 200.0, 120.0).leading_square(), r(5.0, 5.0, 120.0, 120.0));
        assert_eq!(r(0.0, 0.0, 40.0, 90.0).leading_square(), r(0.0, 0.0, 40.0, 40.0));
    }

    // ── center / is_empty ─────────────────────────────────────────────────

    #[test]
    fn center_of_offset_rect() {
        assert_eq!(r(10.0, 20.0, 100.0, 50.0).center(), Vec2::new(60.0, 45.0));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    // ── Vec2::on_ellipse ──────────────────────────────────────────────────

    #[test]
    fn on_ellipse_follows_clockwise_convention() {
        let c = Vec2::new(50.0, 50.0);
        let radii = Vec2::new(10.0, 10.0);
        let top = c.on_ellipse(radii, -90.0);
        assert!((top.x - 50.0).abs() < 1e-4 && (top.y - 40.0).abs() < 1e-4);
        let bottom = c.on_ellipse(radii, 90.0);
        assert!((bottom.y - 60.0).abs() < 1e-4);
    }
}
