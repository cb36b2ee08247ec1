use stepring_engine::coords::{Rect, Vec2};
use stepring_engine::paint::{Color, LinearGradient, Paint};
use stepring_engine::scene::Stroke;

use crate::constraints::{Constraints, LayoutCtx};
use crate::error::RingError;
use crate::geometry::{ArcRole, RingLayout};
use crate::painter::Painter;
use crate::state::{Direction, Invalidation, ProgressState, RingChange, RingConfig, RingState, RingStyle};
use crate::widget::Widget;

/// Side length, in device-independent units, used when the host does not bound the ring.
const FALLBACK_SIDE: f32 = 120.0;

/// A circular progress indicator split into discrete steps.
///
/// Completed steps are drawn in the progress paint, the current step is filled
/// proportionally to its percentage, and the remaining steps show only the
/// background track.
///
/// Every setter validates its input. Rejected values are logged at `warn` and leave
/// the ring untouched; accepted values accumulate an [`Invalidation`] that the host
/// collects with [`take_invalidation`](Self::take_invalidation).
///
/// # Example
/// ```rust,ignore
/// let mut ring = StepProgressRing::new()
///     .steps(4)
///     .gap(8.0)
///     .gradient(Some(Color::red()), Some(Color::gray()))
///     .on_progress(|step, percent| log::info!("step {step}: {percent}%"));
/// ring.set_progress(2, 50.0);
/// ```
pub struct StepProgressRing {
    state: RingState,
    on_progress: Option<Box<dyn FnMut(u32, f32)>>,
    pending: Invalidation,
}

impl StepProgressRing {
    pub fn new() -> Self {
        Self {
            state: RingState::default(),
            on_progress: None,
            // A fresh widget has never been laid out.
            pending: Invalidation::Relayout,
        }
    }

    // ── builder ───────────────────────────────────────────────────────────

    pub fn steps(self, v: u32) -> Self { self.with(RingChange::Steps(v)) }
    pub fn gap(self, v: f32) -> Self { self.with(RingChange::Gap(v)) }
    pub fn direction(self, v: Direction) -> Self { self.with(RingChange::Direction(v)) }
    pub fn round_caps(self, v: bool) -> Self { self.with(RingChange::RoundCaps(v)) }
    pub fn progress_color(self, v: Color) -> Self { self.with(RingChange::ProgressColor(v)) }
    pub fn background_color(self, v: Color) -> Self { self.with(RingChange::BackgroundColor(v)) }
    pub fn progress_width(self, v: f32) -> Self { self.with(RingChange::ProgressWidth(v)) }
    pub fn background_width(self, v: f32) -> Self { self.with(RingChange::BackgroundWidth(v)) }
    pub fn gradient_degree(self, v: f32) -> Self { self.with(RingChange::GradientDegree(v)) }

    /// Gradient endpoint colors. `None` falls back to the progress color.
    pub fn gradient(self, start: Option<Color>, end: Option<Color>) -> Self {
        self.with(RingChange::ProgressStartColor(start))
            .with(RingChange::ProgressEndColor(end))
    }

    pub fn progress(self, step: i32, percent: f32) -> Self {
        self.with(RingChange::Progress { step, percent })
    }

    /// Called with `(step, percent)` on every accepted progress update, before the
    /// redraw is requested.
    pub fn on_progress(mut self, f: impl FnMut(u32, f32) + 'static) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }

    fn with(mut self, change: RingChange) -> Self {
        self.apply(change);
        self
    }

    // ── setters ───────────────────────────────────────────────────────────

    pub fn set_steps(&mut self, v: u32) -> Invalidation { self.apply(RingChange::Steps(v)) }
    pub fn set_gap(&mut self, v: f32) -> Invalidation { self.apply(RingChange::Gap(v)) }
    pub fn set_direction(&mut self, v: Direction) -> Invalidation { self.apply(RingChange::Direction(v)) }
    pub fn set_round_caps(&mut self, v: bool) -> Invalidation { self.apply(RingChange::RoundCaps(v)) }
    pub fn set_progress_color(&mut self, v: Color) -> Invalidation { self.apply(RingChange::ProgressColor(v)) }
    pub fn set_background_color(&mut self, v: Color) -> Invalidation { self.apply(RingChange::BackgroundColor(v)) }
    pub fn set_progress_width(&mut self, v: f32) -> Invalidation { self.apply(RingChange::ProgressWidth(v)) }
    pub fn set_background_width(&mut self, v: f32) -> Invalidation { self.apply(RingChange::BackgroundWidth(v)) }
    pub fn set_gradient_degree(&mut self, v: f32) -> Invalidation { self.apply(RingChange::GradientDegree(v)) }

    pub fn set_progress_start_color(&mut self, v: Option<Color>) -> Invalidation {
        self.apply(RingChange::ProgressStartColor(v))
    }

    pub fn set_progress_end_color(&mut self, v: Option<Color>) -> Invalidation {
        self.apply(RingChange::ProgressEndColor(v))
    }

    pub fn set_progress(&mut self, step: i32, percent: f32) -> Invalidation {
        self.apply(RingChange::Progress { step, percent })
    }

    pub fn set_on_progress(&mut self, f: impl FnMut(u32, f32) + 'static) {
        self.on_progress = Some(Box::new(f));
    }

    /// Applies one change and returns the invalidation it caused
    /// ([`Invalidation::None`] when rejected).
    pub fn apply(&mut self, change: RingChange) -> Invalidation {
        match self.try_apply(change) {
            Ok(invalidation) => invalidation,
            Err(err) => {
                log::warn!("StepProgressRing: {err}; keeping previous value");
                Invalidation::None
            }
        }
    }

    /// Like [`apply`](Self::apply) but hands the rejection back instead of logging it.
    pub fn try_apply(&mut self, change: RingChange) -> Result<Invalidation, RingError> {
        let (next, invalidation) = self.state.update(change)?;
        self.state = next;
        log::debug!("StepProgressRing: applied {change:?} ({invalidation:?})");

        if let RingChange::Progress { .. } = change {
            let progress = self.state.progress;
            if let Some(f) = &mut self.on_progress {
                f(progress.step(), progress.percent());
            }
        }

        self.pending = self.pending.merge(invalidation);
        Ok(invalidation)
    }

    // ── host queries ──────────────────────────────────────────────────────

    /// Returns and clears everything accumulated since the last call.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.pending)
    }

    #[inline]
    pub fn state(&self) -> &RingState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &RingConfig {
        &self.state.config
    }

    #[inline]
    pub fn current_progress(&self) -> ProgressState {
        self.state.progress
    }

    #[inline]
    pub fn style(&self) -> &RingStyle {
        &self.state.style
    }

    pub fn layout(&self) -> RingLayout {
        RingLayout::compute(&self.state.config, &self.state.progress)
    }

    /// Oval the strokes are centred on: the leading square of `rect`, inset by half
    /// the wider stroke so neither stroke is clipped.
    pub fn stroke_bounds(&self, rect: Rect, scale: f32) -> Rect {
        let widest = self.state.style.max_width() * scale;
        rect.leading_square().inset(widest * 0.5)
    }

    /// Paint for filled arcs. A gradient spans the ring's square when either
    /// endpoint color is set; otherwise the solid progress color.
    pub fn progress_paint(&self, rect: Rect) -> Paint {
        let style = &self.state.style;
        if !style.has_gradient() {
            return Paint::Solid(style.progress_color);
        }
        let square = rect.leading_square();
        let (from, to) = style.gradient_colors();
        LinearGradient::rotated(square.origin, square.size, style.gradient_degrees, from, to).into()
    }
}

impl Default for StepProgressRing { fn default() -> Self { Self::new() } }

impl Widget for StepProgressRing {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let side = constraints.max.x.min(constraints.max.y);
        let side = if side.is_finite() { side } else { ctx.dp(FALLBACK_SIDE) };
        constraints.constrain(Vec2::new(side, side))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let style = &self.state.style;
        let cap = self.state.config.cap();
        let bounds = self.stroke_bounds(rect, painter.scale);

        let track_stroke = Stroke::new(painter.dp(style.background_width), cap);
        let fill_stroke = Stroke::new(painter.dp(style.progress_width), cap);
        let track_paint = Paint::Solid(style.background_color);
        let fill_paint = self.progress_paint(rect);

        let layout = self.layout();
        log::trace!(
            "StepProgressRing: painting {} segments into {:?}",
            layout.segments.len(),
            bounds
        );

        for seg in &layout.segments {
            match seg.role {
                ArcRole::Track => painter.stroke_arc(
                    bounds,
                    seg.start_degrees,
                    seg.sweep_degrees,
                    track_stroke,
                    track_paint.clone(),
                ),
                ArcRole::Filled => painter.stroke_arc(
                    bounds,
                    seg.start_degrees,
                    seg.sweep_degrees,
                    fill_stroke,
                    fill_paint.clone(),
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use stepring_engine::scene::{DrawCmd, StrokeCap};

    use super::*;
    use crate::widget::record;

    fn arcs(ring: &StepProgressRing, rect: Rect, scale: f32) -> Vec<stepring_engine::scene::ArcCmd> {
        record(ring, rect, scale)
            .items()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Arc(a) => a.clone(),
            })
            .collect()
    }

    // ── validation / listener ─────────────────────────────────────────────

    #[test]
    fn invalid_step_keeps_state_and_skips_listener() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut ring = StepProgressRing::new()
            .steps(4)
            .progress(1, 70.0)
            .on_progress(move |s, p| sink.borrow_mut().push((s, p)));
        ring.take_invalidation();

        assert_eq!(ring.set_progress(-1, 20.0), Invalidation::None);
        assert_eq!(ring.set_progress(5, 20.0), Invalidation::None);
        assert_eq!(ring.set_progress(2, 101.0), Invalidation::None);

        assert_eq!(ring.current_progress().step(), 1);
        assert_eq!(ring.current_progress().percent(), 70.0);
        assert!(calls.borrow().is_empty());
        assert_eq!(ring.take_invalidation(), Invalidation::None);
    }

    #[test]
    fn accepted_progress_notifies_listener_and_queues_redraw() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut ring = StepProgressRing::new().steps(3);
        ring.take_invalidation();
        ring.set_on_progress(move |s, p| sink.borrow_mut().push((s, p)));

        assert_eq!(ring.set_progress(2, 40.0), Invalidation::Redraw);
        assert_eq!(*seen.borrow(), vec![(2, 40.0)]);
        assert_eq!(ring.take_invalidation(), Invalidation::Redraw);
        assert_eq!(ring.take_invalidation(), Invalidation::None);
    }

    #[test]
    fn try_apply_reports_rejection() {
        let mut ring = StepProgressRing::new();
        assert_eq!(
            ring.try_apply(RingChange::GradientDegree(400.0)),
            Err(RingError::InvalidGradientAngle(400.0))
        );
        assert_eq!(ring.style().gradient_degrees, 45.0);
    }

    #[test]
    fn gradient_degree_out_of_range_keeps_prior_value() {
        let mut ring = StepProgressRing::new().gradient_degree(90.0);
        assert_eq!(ring.set_gradient_degree(400.0), Invalidation::None);
        assert_eq!(ring.style().gradient_degrees, 90.0);
        assert_eq!(ring.set_gradient_degree(-5.0), Invalidation::None);
        assert_eq!(ring.style().gradient_degrees, 90.0);
    }

    #[test]
    fn step_count_change_requests_relayout() {
        let mut ring = StepProgressRing::new();
        ring.take_invalidation();
        ring.set_progress_color(Color::gray());
        assert_eq!(ring.set_steps(6), Invalidation::Relayout);
        assert_eq!(ring.take_invalidation(), Invalidation::Relayout);
    }

    #[test]
    fn defaults_follow_widget_attributes() {
        let ring = StepProgressRing::new();
        assert_eq!(ring.config().step_count, 2);
        assert_eq!(ring.config().gap_degrees, 8.0);
        assert!(ring.config().round_caps);
        assert_eq!(ring.style().progress_width, 20.0);
        assert_eq!(ring.style().background_width, 20.0);
        assert_eq!(ring.style().progress_color, Color::red());
        assert_eq!(ring.style().background_color, Color::gray());
        assert_eq!(ring.current_progress(), ProgressState::NONE);
    }

    // ── measure ───────────────────────────────────────────────────────────

    #[test]
    fn measure_is_square_of_shorter_side() {
        let ring = StepProgressRing::new();
        let ctx = LayoutCtx::new(2.0);
        let size = ring.measure(Constraints::loose(Vec2::new(300.0, 180.0)), &ctx);
        assert_eq!(size, Vec2::new(180.0, 180.0));
        let size = ring.measure(Constraints::unbounded(), &ctx);
        assert_eq!(size, Vec2::new(240.0, 240.0));
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn paint_emits_tracks_then_fills_with_scaled_strokes() {
        let ring = StepProgressRing::new()
            .steps(4)
            .progress_width(10.0)
            .background_width(6.0)
            .progress(2, 50.0);
        let out = arcs(&ring, Rect::new(0.0, 0.0, 200.0, 200.0), 2.0);

        // 4 tracks + 1 full + 1 partial.
        assert_eq!(out.len(), 6);
        // Inset by half of the wider (progress) stroke: 10dp * 2 / 2.
        assert_eq!(out[0].bounds, Rect::new(10.0, 10.0, 180.0, 180.0));
        assert_eq!(out[0].stroke.width, 12.0);
        assert_eq!(out[0].paint, Paint::Solid(Color::gray()));
        assert_eq!(out[1].stroke.width, 20.0);
        assert_eq!(out[1].paint, Paint::Solid(Color::red()));
        assert!((out[3].sweep_degrees - 41.0).abs() < 1e-3);
        assert_eq!(out[0].stroke.cap, StrokeCap::Round);
    }

    #[test]
    fn square_caps_when_rounding_disabled() {
        let ring = StepProgressRing::new().round_caps(false).progress(1, 100.0);
        let out = arcs(&ring, Rect::new(0.0, 0.0, 100.0, 100.0), 1.0);
        assert!(out.iter().all(|a| a.stroke.cap == StrokeCap::Square));
    }

    #[test]
    fn zero_percent_fill_is_not_drawn() {
        let ring = StepProgressRing::new().steps(3).progress(1, 0.0);
        let out = arcs(&ring, Rect::new(0.0, 0.0, 100.0, 100.0), 1.0);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn no_steps_draws_nothing() {
        let ring = StepProgressRing::new().steps(0);
        assert!(record(&ring, Rect::new(0.0, 0.0, 100.0, 100.0), 1.0).is_empty());
    }

    #[test]
    fn gradient_paint_falls_back_to_progress_color() {
        let blue = Color::from_srgb_u8(0, 0, 255, 255);
        let ring = StepProgressRing::new()
            .progress_color(blue)
            .gradient(Some(Color::red()), None)
            .gradient_degree(0.0);
        let Paint::LinearGradient(g) = ring.progress_paint(Rect::new(0.0, 0.0, 100.0, 60.0)) else {
            panic!("expected a gradient paint");
        };
        assert_eq!(g.stops[0].color, Color::red());
        assert_eq!(g.stops[1].color, blue);
        // Spans the 60x60 leading square, top-center to bottom-center at 0°.
        assert!((g.start.x - 30.0).abs() < 1e-3 && g.start.y.abs() < 1e-3);
        assert!((g.end.x - 30.0).abs() < 1e-3 && (g.end.y - 60.0).abs() < 1e-3);
    }

    #[test]
    fn clearing_gradient_colors_restores_solid_paint() {
        let mut ring = StepProgressRing::new().gradient(Some(Color::gray()), Some(Color::red()));
        ring.set_progress_start_color(None);
        ring.set_progress_end_color(None);
        assert_eq!(ring.progress_paint(Rect::new(0.0, 0.0, 10.0, 10.0)), Paint::Solid(Color::red()));
    }

    #[test]
    fn rtl_paint_mirrors_fill() {
        let ring = StepProgressRing::new()
            .steps(4)
            .direction(Direction::RightToLeft)
            .progress(1, 50.0);
        let out = arcs(&ring, Rect::new(0.0, 0.0, 100.0, 100.0), 1.0);
        let fill = out.iter().find(|a| a.paint == Paint::Solid(Color::red())).unwrap();
        // Last slot (start 184°), filled over its trailing half.
        assert!((fill.start_degrees - 225.0).abs() < 1e-3);
        assert!((fill.sweep_degrees - 41.0).abs() < 1e-3);
    }
}
