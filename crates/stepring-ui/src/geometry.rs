//! Arc layout of a segmented ring.
//!
//! The circle is split into `step_count` equal arcs, each followed by a gap of
//! `gap_degrees`. The layout is rotated so the first arc begins half a gap past
//! 12 o'clock. Every slot gets a [`ArcRole::Track`] arc; completed and
//! in-progress steps get an additional [`ArcRole::Filled`] arc on top.
//!
//! Angles use the surface convention: degrees, `0°` at 3 o'clock, clockwise.

use crate::state::{ProgressState, RingConfig};

/// Angle of 12 o'clock in surface degrees.
const TOP_DEGREES: f32 = -90.0;

/// Whether an arc is background or progress.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ArcRole {
    Track,
    Filled,
}

/// One arc-draw instruction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcSegment {
    /// Visual slot, `0..step_count`, counted clockwise from the top.
    pub slot: usize,
    pub start_degrees: f32,
    pub sweep_degrees: f32,
    pub role: ArcRole,
}

impl ArcSegment {
    #[inline]
    pub fn end_degrees(&self) -> f32 {
        self.start_degrees + self.sweep_degrees
    }
}

/// Sweep of a single step, in degrees.
///
/// Zero when there are no steps, more than [`RingConfig::MAX_STEPS`], or when the
/// gaps consume the whole circle.
pub fn arc_length(config: &RingConfig) -> f32 {
    if !config.has_drawable_steps() {
        return 0.0;
    }
    let steps = config.step_count as f32;
    let total_gap = steps * config.gap_degrees;
    ((360.0 - total_gap) / steps).max(0.0)
}

/// Produces the ordered arc instructions for `config` at `progress`.
///
/// Per slot, the track comes first and its filled arc (if any) right after it,
/// which is also the paint order. Step counts above [`RingConfig::MAX_STEPS`]
/// produce no segments.
pub fn compute_segments(config: &RingConfig, progress: &ProgressState) -> Vec<ArcSegment> {
    if !config.has_drawable_steps() {
        return Vec::new();
    }
    let steps = config.step_count as usize;
    let arc = arc_length(config);
    let gap = config.gap_degrees;
    let rtl = config.direction.is_rtl();

    // Signed so that step 0 (nothing started) never matches a slot.
    let active = i64::from(progress.step()) - 1;
    let fraction = progress.percent() / 100.0;

    let mut out = Vec::with_capacity(steps * 2);
    for slot in 0..steps {
        let offset = slot as f32 * (gap + arc);
        let start = offset + TOP_DEGREES + gap / 2.0;

        out.push(ArcSegment {
            slot,
            start_degrees: start,
            sweep_degrees: arc,
            role: ArcRole::Track,
        });

        let counter = (if rtl { steps - slot - 1 } else { slot }) as i64;
        if counter < active {
            out.push(ArcSegment {
                slot,
                start_degrees: start,
                sweep_degrees: arc,
                role: ArcRole::Filled,
            });
        } else if counter == active {
            // Mirrored rings fill from the trailing edge of the slot.
            let start = if rtl { start + arc * (1.0 - fraction) } else { start };
            out.push(ArcSegment {
                slot,
                start_degrees: start,
                sweep_degrees: arc * fraction,
                role: ArcRole::Filled,
            });
        }
    }
    out
}

/// Segments plus the derived per-step sweep, with role filters.
#[derive(Debug, Clone, PartialEq)]
pub struct RingLayout {
    pub arc_length: f32,
    pub segments: Vec<ArcSegment>,
}

impl RingLayout {
    pub fn compute(config: &RingConfig, progress: &ProgressState) -> Self {
        Self {
            arc_length: arc_length(config),
            segments: compute_segments(config, progress),
        }
    }

    pub fn tracks(&self) -> impl Iterator<Item = &ArcSegment> {
        self.segments.iter().filter(|s| s.role == ArcRole::Track)
    }

    pub fn filled(&self) -> impl Iterator<Item = &ArcSegment> {
        self.segments.iter().filter(|s| s.role == ArcRole::Filled)
    }

    /// Slots carrying a filled arc, in visual order.
    pub fn filled_slots(&self) -> Vec<usize> {
        self.filled().map(|s| s.slot).collect()
    }

    /// Sum of all track sweeps.
    pub fn track_total(&self) -> f32 {
        self.tracks().map(|s| s.sweep_degrees).sum()
    }
}
