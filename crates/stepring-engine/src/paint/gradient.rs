use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// `start` and `end` are positions in the same coordinate space as geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self { start, end, stops, spread }
    }

    /// Two-stop gradient from `from` at `start` to `to` at `end`, clamped at the ends.
    pub fn two_stop(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self::new(
            start,
            end,
            vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
            SpreadMode::Pad,
        )
    }

    /// Gradient whose axis passes through the center of a box of `size` at `origin`,
    /// rotated by `degrees`. See [`gradient_endpoints`].
    pub fn rotated(origin: Vec2, size: Vec2, degrees: f32, from: Color, to: Color) -> Self {
        let (p0, p1) = gradient_endpoints(size, degrees);
        Self::two_stop(origin + p0, origin + p1, from, to)
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

/// Endpoints of a gradient axis rotated `degrees` around the center of a `size` box.
///
/// At `0°` the axis runs from top-center to bottom-center; positive angles rotate the
/// start point towards the right edge. Coordinates are relative to the box origin.
pub fn gradient_endpoints(size: Vec2, degrees: f32) -> (Vec2, Vec2) {
    let hw = size.x * 0.5;
    let hh = size.y * 0.5;
    let (sin, cos) = degrees.to_radians().sin_cos();
    (
        Vec2::new(hw * (1.0 + sin), hh * (1.0 - cos)),
        Vec2::new(hw * (1.0 - sin), hh * (1.0 + cos)),
    )
}
