use stepring_engine::coords::Rect;
use stepring_engine::paint::Paint;
use stepring_engine::scene::{DrawList, Stroke};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` and carries the display scale so widgets can
/// convert device-independent sizes while painting.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    /// Device-independent units to logical pixels.
    pub scale: f32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, scale: f32) -> Self {
        Self { draw_list, scale }
    }

    #[inline]
    pub fn dp(&self, v: f32) -> f32 {
        v * self.scale
    }

    /// Stroked arc on the ellipse inscribed in `bounds`, clockwise from `start_degrees`.
    ///
    /// Empty sweeps are dropped.
    pub fn stroke_arc(
        &mut self,
        bounds: Rect,
        start_degrees: f32,
        sweep_degrees: f32,
        stroke: Stroke,
        paint: impl Into<Paint>,
    ) {
        if sweep_degrees <= 0.0 {
            return;
        }
        self.draw_list.push_arc(bounds, start_degrees, sweep_degrees, stroke, paint.into());
    }
}
