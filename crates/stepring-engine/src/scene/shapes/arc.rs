use crate::coords::{Rect, Vec2};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

use super::Stroke;

/// Stroked elliptical arc payload.
///
/// The arc lies on the ellipse inscribed in `bounds`. It starts at `start_degrees`
/// and runs clockwise for `sweep_degrees`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub bounds: Rect,
    pub start_degrees: f32,
    pub sweep_degrees: f32,
    pub stroke: Stroke,
    pub paint: Paint,
}

impl ArcCmd {
    #[inline]
    pub fn new(
        bounds: Rect,
        start_degrees: f32,
        sweep_degrees: f32,
        stroke: Stroke,
        paint: Paint,
    ) -> Self {
        Self { bounds, start_degrees, sweep_degrees, stroke, paint }
    }

    #[inline]
    pub fn radii(&self) -> Vec2 {
        self.bounds.size * 0.5
    }
}

impl DrawList {
    /// Records a stroked arc.
    #[inline]
    pub fn push_arc(
        &mut self,
        bounds: Rect,
        start_degrees: f32,
        sweep_degrees: f32,
        stroke: Stroke,
        paint: Paint,
    ) {
        let arc = ArcCmd::new(bounds, start_degrees, sweep_degrees, stroke, paint);
        self.push(DrawCmd::Arc(arc));
    }
}
