/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Opaque pure red (`#ff0000ff`), the default progress color.
    #[inline]
    pub const fn red() -> Self {
        Self { r: 1.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    /// Opaque mid gray (`#888888ff`), the default track color.
    #[inline]
    pub fn gray() -> Self {
        Self::from_srgb_u8(0x88, 0x88, 0x88, 0xff)
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (straight alpha). The leading `#` is required.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, 0xff)),
            8 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha bytes, the inverse of [`from_srgb_u8`](Self::from_srgb_u8).
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }

    /// `#rrggbb` for the color channels, ignoring alpha.
    pub fn to_hex_rgb(self) -> String {
        let [r, g, b, _] = self.to_srgb_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_six_digits_is_opaque() {
        let c = Color::from_hex("#ff8000").unwrap();
        assert_eq!(c.to_srgb_u8(), [0xff, 0x80, 0x00, 0xff]);
    }

    #[test]
    fn hex_eight_digits_premultiplies() {
        let c = Color::from_hex("#ffffff80").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
        assert!((c.r - c.a).abs() < 1e-6);
        assert_eq!(c.to_srgb_u8(), [0xff, 0xff, 0xff, 0x80]);
    }

    #[test]
    fn hex_rejects_malformed_input() {
        assert!(Color::from_hex("ff0000").is_none());
        assert!(Color::from_hex("#ff00").is_none());
        assert!(Color::from_hex("#gg0000").is_none());
        assert!(Color::from_hex("#ff00000").is_none());
        assert!(Color::from_hex("#ffé000").is_none());
    }

    #[test]
    fn defaults_match_named_colors() {
        assert_eq!(Color::red().to_hex_rgb(), "#ff0000");
        assert_eq!(Color::gray().to_hex_rgb(), "#888888");
    }

    #[test]
    fn transparent_round_trips_to_zero_bytes() {
        assert_eq!(Color::transparent().to_srgb_u8(), [0, 0, 0, 0]);
        assert!(Color::from_hex("#00000000").unwrap().is_transparent());
    }
}
