//! Coordinate and geometry types shared between the ring widget and surfaces.
//!
//! Canonical CPU space:
//! - Logical pixels (already multiplied by the display scale)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are in degrees, `0°` at 3 o'clock, increasing clockwise (because +Y is down).

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
