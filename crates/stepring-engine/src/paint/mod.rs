//! Paint model shared between the ring widget and surfaces.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, two-point linear gradients)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{gradient_endpoints, ColorStop, LinearGradient, SpreadMode};

/// Paint source for stroking an arc.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(gradient: LinearGradient) -> Self {
        Paint::LinearGradient(gradient)
    }
}
