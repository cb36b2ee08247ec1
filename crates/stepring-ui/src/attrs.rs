//! Binding a ring from declarative attributes.
//!
//! Attributes arrive as `key: value` strings, either as pairs from a host's markup
//! layer or as a small text block:
//!
//! ```text
//! // onboarding ring
//! steps: 4
//! space: 8
//! progress_start_color: #ff5722ff
//! progress_end_color: #ffc107ff
//! current_step: 2
//! progress: 50
//! ```
//!
//! Missing keys keep their defaults. Values are applied through the ring's
//! validated setters, so an out-of-range value is logged and ignored rather than
//! failing the whole binding.

use stepring_engine::paint::Color;

use crate::error::AttrError;
use crate::state::{Direction, RingChange, RingConfig, RingStyle};
use crate::widgets::step_ring::StepProgressRing;

/// Typed attribute set for a [`StepProgressRing`]. Widths are device-independent.
#[derive(Debug, Clone, PartialEq)]
pub struct RingAttrs {
    pub steps: u32,
    pub space: f32,
    pub round_corners: bool,
    pub layout_direction: Direction,
    pub progress_color: Color,
    pub progress_start_color: Option<Color>,
    pub progress_end_color: Option<Color>,
    pub progress_gradient_degree: f32,
    pub progress_background_color: Color,
    pub progress_width: f32,
    pub progress_background_width: f32,
    pub current_step: i32,
    pub progress: f32,
}

impl Default for RingAttrs {
    fn default() -> Self {
        let style = RingStyle::default();
        Self {
            steps: RingConfig::DEFAULT_STEPS,
            space: RingConfig::DEFAULT_GAP,
            round_corners: true,
            layout_direction: Direction::LeftToRight,
            progress_color: style.progress_color,
            progress_start_color: None,
            progress_end_color: None,
            progress_gradient_degree: style.gradient_degrees,
            progress_background_color: style.background_color,
            progress_width: style.progress_width,
            progress_background_width: style.background_width,
            current_step: 0,
            progress: 0.0,
        }
    }
}

impl RingAttrs {
    /// Binds every pair on top of the defaults. Later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, AttrError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut attrs = Self::default();
        for (key, value) in pairs {
            attrs.set(key.as_ref(), value.as_ref())?;
        }
        Ok(attrs)
    }

    /// Parses a `key: value` per line block. Blank lines and `//` comments are skipped.
    pub fn parse_str(src: &str) -> Result<Self, AttrError> {
        let mut attrs = Self::default();
        for (idx, raw) in src.lines().enumerate() {
            let line = raw.split("//").next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                return Err(AttrError::MalformedLine { line: idx + 1, text: raw.trim().to_string() });
            };
            attrs.set(key.trim(), value.trim())?;
        }
        Ok(attrs)
    }

    /// Sets a single attribute from its textual value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), AttrError> {
        let value = value.trim();
        match key {
            "steps" => self.steps = parse(key, value, "a non-negative integer")?,
            "space" => self.space = parse(key, value, "a number of degrees")?,
            "round_corners" => self.round_corners = parse(key, value, "`true` or `false`")?,
            "layout_direction" => self.layout_direction = parse_direction(key, value)?,
            "progress_color" => self.progress_color = parse_color(key, value)?,
            "progress_start_color" => self.progress_start_color = parse_optional_color(key, value)?,
            "progress_end_color" => self.progress_end_color = parse_optional_color(key, value)?,
            "progress_gradient_degree" => {
                self.progress_gradient_degree = parse(key, value, "a number of degrees")?
            }
            "progress_background_color" => self.progress_background_color = parse_color(key, value)?,
            "progress_width" => self.progress_width = parse(key, value, "a width in dp")?,
            "progress_background_width" => {
                self.progress_background_width = parse(key, value, "a width in dp")?
            }
            "current_step" => self.current_step = parse(key, value, "an integer step")?,
            "progress" => self.progress = parse(key, value, "a percentage")?,
            _ => return Err(AttrError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// The attribute set as ring changes, in binding order. Progress comes last so
    /// it is validated against the final step count.
    pub fn changes(&self) -> Vec<RingChange> {
        vec![
            RingChange::Steps(self.steps),
            RingChange::Gap(self.space),
            RingChange::RoundCaps(self.round_corners),
            RingChange::Direction(self.layout_direction),
            RingChange::ProgressColor(self.progress_color),
            RingChange::ProgressStartColor(self.progress_start_color),
            RingChange::ProgressEndColor(self.progress_end_color),
            RingChange::GradientDegree(self.progress_gradient_degree),
            RingChange::BackgroundColor(self.progress_background_color),
            RingChange::ProgressWidth(self.progress_width),
            RingChange::BackgroundWidth(self.progress_background_width),
            RingChange::Progress { step: self.current_step, percent: self.progress },
        ]
    }

    /// Builds a ring. Out-of-range values are logged and keep the ring defaults.
    pub fn build(&self) -> StepProgressRing {
        let mut ring = StepProgressRing::new();
        for change in self.changes() {
            ring.apply(change);
        }
        ring
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str, expected: &'static str) -> Result<T, AttrError> {
    value.parse().map_err(|_| invalid(key, value, expected))
}

fn parse_color(key: &str, value: &str) -> Result<Color, AttrError> {
    Color::from_hex(value).ok_or_else(|| invalid(key, value, "a `#rrggbb` or `#rrggbbaa` color"))
}

/// Fully transparent means "not set", matching how markup encodes an absent color.
fn parse_optional_color(key: &str, value: &str) -> Result<Option<Color>, AttrError> {
    let color = parse_color(key, value)?;
    Ok((!color.is_transparent()).then_some(color))
}

fn parse_direction(key: &str, value: &str) -> Result<Direction, AttrError> {
    match value {
        "ltr" => Ok(Direction::LeftToRight),
        "rtl" => Ok(Direction::RightToLeft),
        _ => Err(invalid(key, value, "`ltr` or `rtl`")),
    }
}

fn invalid(key: &str, value: &str, expected: &'static str) -> AttrError {
    AttrError::InvalidValue { key: key.to_string(), value: value.to_string(), expected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ProgressState;

    #[test]
    fn empty_source_gives_defaults() {
        let attrs = RingAttrs::parse_str("").unwrap();
        assert_eq!(attrs, RingAttrs::default());
        let ring = attrs.build();
        assert_eq!(ring.config().step_count, 2);
        assert_eq!(ring.style().gradient_degrees, 45.0);
        assert_eq!(ring.current_progress(), ProgressState::NONE);
    }

    #[test]
    fn parses_block_with_comments() {
        let src = "
            // onboarding
            steps: 4
            space: 6.5   // degrees
            round_corners: false
            layout_direction: rtl
            progress_start_color: #ff5722ff
            progress_end_color: #00000000
            progress_width: 12
            current_step: 3
            progress: 25
        ";
        let attrs = RingAttrs::parse_str(src).unwrap();
        assert_eq!(attrs.steps, 4);
        assert_eq!(attrs.space, 6.5);
        assert!(!attrs.round_corners);
        assert_eq!(attrs.layout_direction, Direction::RightToLeft);
        assert_eq!(attrs.progress_start_color, Color::from_hex("#ff5722"));
        assert_eq!(attrs.progress_end_color, None);

        let ring = attrs.build();
        assert_eq!(ring.current_progress().step(), 3);
        assert_eq!(ring.current_progress().percent(), 25.0);
        assert_eq!(ring.style().progress_width, 12.0);
        assert!(ring.config().direction.is_rtl());
    }

    #[test]
    fn pairs_bind_like_markup() {
        let attrs = RingAttrs::from_pairs([("steps", "5"), ("progress_color", "#00ff00")]).unwrap();
        assert_eq!(attrs.steps, 5);
        assert_eq!(attrs.progress_color, Color::from_srgb_u8(0, 255, 0, 255));
    }

    #[test]
    fn unknown_key_is_an_error() {
        assert_eq!(
            RingAttrs::from_pairs([("colour", "#ffffff")]),
            Err(AttrError::UnknownKey("colour".into()))
        );
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(matches!(
            RingAttrs::from_pairs([("steps", "-2")]),
            Err(AttrError::InvalidValue { .. })
        ));
        assert!(matches!(
            RingAttrs::from_pairs([("progress_color", "red")]),
            Err(AttrError::InvalidValue { .. })
        ));
        assert!(matches!(
            RingAttrs::from_pairs([("layout_direction", "up")]),
            Err(AttrError::InvalidValue { .. })
        ));
    }

    #[test]
    fn malformed_line_reports_position() {
        let err = RingAttrs::parse_str("steps: 3\nspace 8\n").unwrap_err();
        assert_eq!(err, AttrError::MalformedLine { line: 2, text: "space 8".into() });
    }

    #[test]
    fn out_of_range_initial_progress_is_ignored() {
        let attrs = RingAttrs::from_pairs([("steps", "3"), ("current_step", "7"), ("progress", "10")]).unwrap();
        let ring = attrs.build();
        assert_eq!(ring.current_progress(), ProgressState::NONE);
    }

    #[test]
    fn huge_step_count_keeps_default_ring() {
        let src = "steps: 4294967295\ncurrent_step: 1\nprogress: 50";
        let ring = RingAttrs::parse_str(src).unwrap().build();
        assert_eq!(ring.config().step_count, RingConfig::DEFAULT_STEPS);
        assert_eq!(ring.current_progress().step(), 1);
        assert_eq!(ring.layout().tracks().count(), 2);
    }

    #[test]
    fn out_of_range_gradient_degree_keeps_default() {
        let ring = RingAttrs::from_pairs([("progress_gradient_degree", "725")]).unwrap().build();
        assert_eq!(ring.style().gradient_degrees, 45.0);
    }
}
