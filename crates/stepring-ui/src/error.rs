use std::fmt;

use crate::state::RingConfig;

/// A rejected ring mutation. The ring keeps its previous state.
#[derive(Debug, Clone, PartialEq)]
pub enum RingError {
    /// Step count above [`RingConfig::MAX_STEPS`].
    InvalidStepCount(u32),
    /// Step outside `0..=step_count`.
    InvalidStepIndex { step: i32, step_count: u32 },
    /// Percentage outside `0..=100` or not a number.
    InvalidPercentage(f32),
    /// Gradient angle outside `0..=360` degrees.
    InvalidGradientAngle(f32),
    /// Negative or non-finite gap between steps.
    InvalidGap(f32),
    /// Negative or non-finite stroke width.
    InvalidStrokeWidth(f32),
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingError::InvalidStepCount(count) => {
                write!(f, "step count {count} exceeds {}", RingConfig::MAX_STEPS)
            }
            RingError::InvalidStepIndex { step, step_count } => {
                write!(f, "step {step} not found (ring has {step_count} steps)")
            }
            RingError::InvalidPercentage(p) => write!(f, "progress {p} is outside 0..=100"),
            RingError::InvalidGradientAngle(d) => {
                write!(f, "gradient degree {d} is outside 0..=360")
            }
            RingError::InvalidGap(g) => write!(f, "step gap {g} must be a non-negative number"),
            RingError::InvalidStrokeWidth(w) => {
                write!(f, "stroke width {w} must be a non-negative number")
            }
        }
    }
}

impl std::error::Error for RingError {}

/// An attribute that could not be bound to a ring.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrError {
    UnknownKey(String),
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
    /// A source line that is not `key: value`. `line` is 1-based.
    MalformedLine { line: usize, text: String },
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrError::UnknownKey(key) => write!(f, "unknown ring attribute `{key}`"),
            AttrError::InvalidValue { key, value, expected } => {
                write!(f, "attribute `{key}`: expected {expected}, found `{value}`")
            }
            AttrError::MalformedLine { line, text } => {
                write!(f, "line {line}: expected `key: value`, found `{text}`")
            }
        }
    }
}

impl std::error::Error for AttrError {}
