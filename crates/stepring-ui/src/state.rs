use stepring_engine::paint::Color;
use stepring_engine::scene::StrokeCap;

use crate::error::RingError;

// ── Direction ─────────────────────────────────────────────────────────────

/// Layout direction of the host. Right-to-left mirrors the fill order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    #[inline]
    pub fn is_rtl(self) -> bool {
        self == Direction::RightToLeft
    }
}

// ── RingConfig ────────────────────────────────────────────────────────────

/// Step layout of the ring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingConfig {
    pub step_count: u32,
    /// Angular gap inserted after every step, in degrees.
    pub gap_degrees: f32,
    pub direction: Direction,
    pub round_caps: bool,
}

impl RingConfig {
    pub const DEFAULT_STEPS: u32 = 2;
    pub const DEFAULT_GAP: f32 = 8.0;
    /// Upper bound on `step_count`: one step per degree.
    pub const MAX_STEPS: u32 = 360;

    pub fn new(step_count: u32, gap_degrees: f32) -> Self {
        Self { step_count, gap_degrees, ..Self::default() }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// At least one step and no more than [`MAX_STEPS`](Self::MAX_STEPS).
    #[inline]
    pub fn has_drawable_steps(&self) -> bool {
        (1..=Self::MAX_STEPS).contains(&self.step_count)
    }

    pub fn cap(&self) -> StrokeCap {
        if self.round_caps { StrokeCap::Round } else { StrokeCap::Square }
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            step_count: Self::DEFAULT_STEPS,
            gap_degrees: Self::DEFAULT_GAP,
            direction: Direction::LeftToRight,
            round_caps: true,
        }
    }
}

// ── ProgressState ─────────────────────────────────────────────────────────

/// Which step is in progress and how far along it is.
///
/// `step` is 1-based; `0` means no step has started.
/// Invariant: `step <= step_count` of the owning ring and `percent` is in `0..=100`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ProgressState {
    step: u32,
    percent: f32,
}

impl ProgressState {
    pub const NONE: ProgressState = ProgressState { step: 0, percent: 0.0 };

    /// Validates `(step, percent)` against a ring of `step_count` steps.
    ///
    /// The step is checked before the percentage.
    pub fn new(step: i32, percent: f32, step_count: u32) -> Result<Self, RingError> {
        let in_range = u32::try_from(step).ok().filter(|&s| s <= step_count);
        let Some(step) = in_range else {
            return Err(RingError::InvalidStepIndex { step, step_count });
        };
        if !(0.0..=100.0).contains(&percent) {
            return Err(RingError::InvalidPercentage(percent));
        }
        Ok(Self { step, percent })
    }

    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }

    #[inline]
    pub fn percent(&self) -> f32 {
        self.percent
    }
}

// ── RingStyle ─────────────────────────────────────────────────────────────

/// Presentation of the ring. Widths are in device-independent units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RingStyle {
    pub progress_width: f32,
    pub background_width: f32,
    pub progress_color: Color,
    pub background_color: Color,
    /// Gradient start color; falls back to `progress_color`.
    pub progress_start_color: Option<Color>,
    /// Gradient end color; falls back to `progress_color`.
    pub progress_end_color: Option<Color>,
    /// Gradient axis rotation in degrees, `0..=360`.
    pub gradient_degrees: f32,
}

impl RingStyle {
    pub const DEFAULT_WIDTH: f32 = 20.0;
    pub const DEFAULT_GRADIENT_DEGREES: f32 = 45.0;

    /// True when either gradient endpoint overrides the solid progress color.
    #[inline]
    pub fn has_gradient(&self) -> bool {
        self.progress_start_color.is_some() || self.progress_end_color.is_some()
    }

    /// Gradient endpoint colors after falling back to the progress color.
    pub fn gradient_colors(&self) -> (Color, Color) {
        (
            self.progress_start_color.unwrap_or(self.progress_color),
            self.progress_end_color.unwrap_or(self.progress_color),
        )
    }

    /// The wider of the two strokes.
    #[inline]
    pub fn max_width(&self) -> f32 {
        self.progress_width.max(self.background_width)
    }
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            progress_width: Self::DEFAULT_WIDTH,
            background_width: Self::DEFAULT_WIDTH,
            progress_color: Color::red(),
            background_color: Color::gray(),
            progress_start_color: None,
            progress_end_color: None,
            gradient_degrees: Self::DEFAULT_GRADIENT_DEGREES,
        }
    }
}

// ── RingChange / Invalidation ─────────────────────────────────────────────

/// A single host-side mutation of the ring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RingChange {
    Steps(u32),
    Gap(f32),
    Direction(Direction),
    RoundCaps(bool),
    ProgressColor(Color),
    ProgressStartColor(Option<Color>),
    ProgressEndColor(Option<Color>),
    GradientDegree(f32),
    BackgroundColor(Color),
    ProgressWidth(f32),
    BackgroundWidth(f32),
    Progress { step: i32, percent: f32 },
}

/// What the host has to do after a change. Ordered: `Relayout` implies a redraw.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default, Hash)]
pub enum Invalidation {
    #[default]
    None,
    Redraw,
    Relayout,
}

impl Invalidation {
    #[inline]
    pub fn merge(self, other: Invalidation) -> Invalidation {
        self.max(other)
    }

    #[inline]
    pub fn needs_redraw(self) -> bool {
        self != Invalidation::None
    }

    #[inline]
    pub fn needs_relayout(self) -> bool {
        self == Invalidation::Relayout
    }
}

// ── RingState ─────────────────────────────────────────────────────────────

/// Complete ring state. Transitions are pure: [`update`](Self::update) never
/// touches a host, it only reports what the host must redo.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RingState {
    pub config: RingConfig,
    pub progress: ProgressState,
    pub style: RingStyle,
}

impl RingState {
    /// Applies `change`, returning the new state and the invalidation it causes.
    ///
    /// Rejected changes return the error and leave `self` as the valid state.
    pub fn update(&self, change: RingChange) -> Result<(RingState, Invalidation), RingError> {
        let mut next = *self;
        let invalidation = match change {
            RingChange::Steps(count) => {
                if count > RingConfig::MAX_STEPS {
                    return Err(RingError::InvalidStepCount(count));
                }
                next.config.step_count = count;
                if next.progress.step > count {
                    // Keep the step inside the new ring.
                    next.progress.step = count;
                }
                Invalidation::Relayout
            }
            RingChange::Gap(gap) => {
                if !gap.is_finite() || gap < 0.0 {
                    return Err(RingError::InvalidGap(gap));
                }
                next.config.gap_degrees = gap;
                Invalidation::Relayout
            }
            RingChange::Direction(direction) => {
                next.config.direction = direction;
                Invalidation::Redraw
            }
            RingChange::RoundCaps(round) => {
                next.config.round_caps = round;
                Invalidation::Redraw
            }
            RingChange::ProgressColor(color) => {
                next.style.progress_color = color;
                Invalidation::Redraw
            }
            RingChange::ProgressStartColor(color) => {
                next.style.progress_start_color = color;
                Invalidation::Redraw
            }
            RingChange::ProgressEndColor(color) => {
                next.style.progress_end_color = color;
                Invalidation::Redraw
            }
            RingChange::GradientDegree(degrees) => {
                next.style.gradient_degrees = validate_gradient_degree(degrees)?;
                Invalidation::Redraw
            }
            RingChange::BackgroundColor(color) => {
                next.style.background_color = color;
                Invalidation::Redraw
            }
            RingChange::ProgressWidth(width) => {
                next.style.progress_width = validate_width(width)?;
                Invalidation::Relayout
            }
            RingChange::BackgroundWidth(width) => {
                next.style.background_width = validate_width(width)?;
                Invalidation::Relayout
            }
            RingChange::Progress { step, percent } => {
                next.progress = ProgressState::new(step, percent, self.config.step_count)?;
                Invalidation::Redraw
            }
        };
        Ok((next, invalidation))
    }
}

/// Accepts gradient angles in `0..=360` degrees.
pub fn validate_gradient_degree(degrees: f32) -> Result<f32, RingError> {
    if (0.0..=360.0).contains(&degrees) {
        Ok(degrees)
    } else {
        Err(RingError::InvalidGradientAngle(degrees))
    }
}

fn validate_width(width: f32) -> Result<f32, RingError> {
    if width.is_finite() && width >= 0.0 {
        Ok(width)
    } else {
        Err(RingError::InvalidStrokeWidth(width))
    }
}
