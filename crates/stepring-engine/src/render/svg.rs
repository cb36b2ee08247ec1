use std::fmt::Write as _;

use crate::coords::Vec2;
use crate::paint::{LinearGradient, Paint, SpreadMode};
use crate::scene::ArcCmd;

use super::Surface;

/// Serializes arc commands into a standalone SVG document.
///
/// Each arc becomes a `<path>` with an elliptical `A` segment; gradient paints become
/// `<linearGradient>` definitions in user space so their endpoints match the geometry.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: Vec2,
    defs: String,
    body: String,
    gradients: usize,
}

impl SvgSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            defs: String::new(),
            body: String::new(),
            gradients: 0,
        }
    }

    /// Returns the complete document.
    pub fn finish(self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(self.size.x),
            h = num(self.size.y),
        );
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            out.push_str(&self.defs);
            out.push_str("</defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn paint_attrs(&mut self, paint: &Paint) -> String {
        match paint {
            Paint::Solid(c) => {
                let (.., a) = c.to_straight();
                format!(r#"stroke="{}" stroke-opacity="{}""#, c.to_hex_rgb(), num(a))
            }
            Paint::LinearGradient(g) => {
                let id = self.push_gradient(g);
                format!(r#"stroke="url(#{id})""#)
            }
        }
    }

    fn push_gradient(&mut self, g: &LinearGradient) -> String {
        let id = format!("ring-gradient-{}", self.gradients);
        self.gradients += 1;
        let spread = match g.spread {
            SpreadMode::Pad => "pad",
            SpreadMode::Repeat => "repeat",
            SpreadMode::Reflect => "reflect",
        };
        let _ = writeln!(
            self.defs,
            r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}" spreadMethod="{spread}">"#,
            num(g.start.x),
            num(g.start.y),
            num(g.end.x),
            num(g.end.y),
        );
        for stop in &g.stops {
            let (.., a) = stop.color.to_straight();
            let _ = writeln!(
                self.defs,
                r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                num(stop.t),
                stop.color.to_hex_rgb(),
                num(a),
            );
        }
        self.defs.push_str("</linearGradient>\n");
        id
    }
}

impl Surface for SvgSurface {
    fn draw_arc(&mut self, arc: &ArcCmd) {
        if arc.sweep_degrees == 0.0 || arc.bounds.is_empty() || !arc.bounds.is_finite() {
            return;
        }
        let paint = self.paint_attrs(&arc.paint);
        let d = arc_path(arc);
        let _ = writeln!(
            self.body,
            r#"<path d="{d}" fill="none" {paint} stroke-width="{}" stroke-linecap="{}"/>"#,
            num(arc.stroke.width),
            arc.stroke.cap.svg_name(),
        );
    }
}

/// Path data for the arc. Sweeps of a full turn or more are split in two because an
/// SVG arc whose endpoints coincide draws nothing.
fn arc_path(arc: &ArcCmd) -> String {
    let center = arc.bounds.center();
    let radii = arc.radii();
    let sweep = arc.sweep_degrees.clamp(-360.0, 360.0);
    let start = center.on_ellipse(radii, arc.start_degrees);

    let mut d = format!("M {} {}", num(start.x), num(start.y));
    let pieces: &[f32] = if sweep.abs() >= 360.0 { &[0.5, 1.0] } else { &[1.0] };
    let mut prev = 0.0;
    for &frac in pieces {
        let part = sweep * (frac - prev);
        let end = center.on_ellipse(radii, arc.start_degrees + sweep * frac);
        let large = u8::from(part.abs() > 180.0);
        let clockwise = u8::from(part > 0.0);
        let _ = write!(
            d,
            " A {} {} 0 {large} {clockwise} {} {}",
            num(radii.x),
            num(radii.y),
            num(end.x),
            num(end.y),
        );
        prev = frac;
    }
    d
}

/// Compact decimal: three fractional digits, trailing zeros dropped.
fn num(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;
    use crate::scene::{DrawList, Stroke, StrokeCap};

    fn arc(start: f32, sweep: f32, paint: Paint) -> ArcCmd {
        ArcCmd::new(
            Rect::new(10.0, 10.0, 80.0, 80.0),
            start,
            sweep,
            Stroke::new(20.0, StrokeCap::Round),
            paint,
        )
    }

    #[test]
    fn num_trims_trailing_zeros() {
        assert_eq!(num(82.0), "82");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(1.23456), "1.235");
    }

    #[test]
    fn quarter_arc_from_top() {
        let d = arc_path(&arc(-90.0, 90.0, Paint::Solid(Color::red())));
        assert_eq!(d, "M 50 10 A 40 40 0 0 1 90 50");
    }

    #[test]
    fn large_arc_flag_set_past_half_turn() {
        let d = arc_path(&arc(-90.0, 270.0, Paint::Solid(Color::red())));
        assert!(d.contains(" 0 1 1 "), "{d}");
    }

    #[test]
    fn full_turn_is_split() {
        let d = arc_path(&arc(0.0, 360.0, Paint::Solid(Color::red())));
        assert_eq!(d.matches(" A ").count(), 2);
    }

    #[test]
    fn zero_sweep_is_skipped() {
        let mut svg = SvgSurface::new(100.0, 100.0);
        svg.draw_arc(&arc(0.0, 0.0, Paint::Solid(Color::red())));
        assert!(!svg.finish().contains("<path"));
    }

    #[test]
    fn gradient_paint_emits_definition() {
        let g = LinearGradient::rotated(Vec2::zero(), Vec2::new(100.0, 100.0), 45.0, Color::red(), Color::gray());
        let mut list = DrawList::new();
        list.push_arc(Rect::new(10.0, 10.0, 80.0, 80.0), -86.0, 82.0, Stroke::new(20.0, StrokeCap::Square), g.into());
        let mut svg = SvgSurface::new(100.0, 100.0);
        list.replay(&mut svg);
        let out = svg.finish();
        assert!(out.contains(r#"<linearGradient id="ring-gradient-0""#));
        assert!(out.contains(r#"stroke="url(#ring-gradient-0)""#));
        assert!(out.contains(r#"stroke-linecap="square""#));
        assert!(out.contains(r##"stop-color="#888888""##));
    }
}
