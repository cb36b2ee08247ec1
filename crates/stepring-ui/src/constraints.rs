use stepring_engine::coords::Vec2;

// ── Constraints ───────────────────────────────────────────────────────────

/// Size limits handed to [`Widget::measure`](crate::widget::Widget::measure) by the host.
///
/// `max` components may be `f32::INFINITY` for unbounded axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Any size from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// Exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// No upper bound on either axis.
    #[inline]
    pub fn unbounded() -> Self {
        Self::loose(Vec2::new(f32::INFINITY, f32::INFINITY))
    }

    #[inline]
    pub fn constrain(&self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.clamp(self.min.x, self.max.x),
            size.y.clamp(self.min.y, self.max.y),
        )
    }
}

// ── LayoutCtx ─────────────────────────────────────────────────────────────

/// Per-layout context supplied by the host.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutCtx {
    /// Device-independent units to logical pixels.
    pub scale: f32,
}

impl LayoutCtx {
    #[inline]
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    #[inline]
    pub fn dp(&self, v: f32) -> f32 {
        v * self.scale
    }
}

impl Default for LayoutCtx {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}
