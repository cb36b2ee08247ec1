//! Rendering surfaces.
//!
//! A [`Surface`] is the consumer side of a [`DrawList`](crate::scene::DrawList):
//! anything that can stroke arcs (a GPU renderer, a canvas binding, a test recorder).
//! [`SvgSurface`] is the built-in implementation used for snapshots.

mod svg;

pub use svg::SvgSurface;

use crate::scene::ArcCmd;

/// A target that accepts stroked arc commands.
pub trait Surface {
    fn draw_arc(&mut self, arc: &ArcCmd);
}
