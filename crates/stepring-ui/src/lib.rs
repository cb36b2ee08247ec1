//! Stepring UI: a segmented circular progress ring on top of `stepring-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use stepring_ui::prelude::*;
//!
//! let mut ring = StepProgressRing::new().steps(4).gap(8.0);
//! ring.set_progress(2, 50.0);
//!
//! // In the host's frame callback:
//! if ring.take_invalidation().needs_redraw() {
//!     let list = record(&ring, Rect::new(0.0, 0.0, 200.0, 200.0), scale);
//!     list.replay(&mut my_surface);
//! }
//! ```
//!
//! The geometry is available without any widget through
//! [`geometry::compute_segments`].

pub mod attrs;
pub mod constraints;
pub mod error;
pub mod geometry;
pub mod painter;
pub mod state;
pub mod widget;
pub mod widgets;

/// Everything a host needs to embed the ring.
pub mod prelude {
    pub use crate::attrs::RingAttrs;
    pub use crate::constraints::{Constraints, LayoutCtx};
    pub use crate::error::{AttrError, RingError};
    pub use crate::geometry::{arc_length, compute_segments, ArcRole, ArcSegment, RingLayout};
    pub use crate::painter::Painter;
    pub use crate::state::{
        Direction, Invalidation, ProgressState, RingChange, RingConfig, RingState, RingStyle,
    };
    pub use crate::widget::{record, Widget};
    pub use crate::widgets::step_ring::StepProgressRing;

    pub use stepring_engine::coords::{Rect, Vec2};
    pub use stepring_engine::paint::{Color, LinearGradient, Paint};
    pub use stepring_engine::render::{Surface, SvgSurface};
    pub use stepring_engine::scene::{ArcCmd, DrawList, Stroke, StrokeCap};
}
