pub mod arc;

/// How the open ends of a stroked arc are finished.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum StrokeCap {
    /// Half-disc extending past the endpoint by half the stroke width.
    #[default]
    Round,
    /// Half-square extending past the endpoint by half the stroke width.
    Square,
}

impl StrokeCap {
    /// Name used by SVG's `stroke-linecap`.
    pub fn svg_name(self) -> &'static str {
        match self {
            StrokeCap::Round => "round",
            StrokeCap::Square => "square",
        }
    }
}

/// Stroke style for outlined shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    /// Width in logical pixels, centred on the path.
    pub width: f32,
    pub cap: StrokeCap,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, cap: StrokeCap) -> Self {
        Self { width, cap }
    }
}
