use stepring_engine::coords::{Rect, Vec2};
use stepring_engine::scene::DrawList;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;

/// The seam between a host view system and a drawable component.
///
/// The host owns sizing and invalidation: it asks for a size with
/// [`measure`](Self::measure), assigns a rect, then calls [`paint`](Self::paint)
/// whenever the widget reports that it needs a redraw.
pub trait Widget {
    /// Size this widget wants within `constraints`.
    ///
    /// Must be deterministic for the same arguments.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Draw this widget into `painter` within `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);
}

/// Paints `widget` into a fresh draw list.
pub fn record<W: Widget + ?Sized>(widget: &W, rect: Rect, scale: f32) -> DrawList {
    let mut list = DrawList::new();
    widget.paint(&mut Painter::new(&mut list, scale), rect);
    list
}
