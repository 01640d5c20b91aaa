use std::fmt;
use std::str::FromStr;

/// Error returned by [`Color::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color '{}': expected #RRGGBB or #AARRGGBB", self.0)
    }
}

impl std::error::Error for ColorParseError {}

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
/// - `rgb` components are linear; sRGB bytes are decoded on construction and the
///   sRGB surface encodes them again on output.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied linear color from straight sRGB bytes (`0`–`255`).
    ///
    /// This is the preferred constructor for colors coming from hex literals.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            srgb_to_linear(r as f32 / 255.0),
            srgb_to_linear(g as f32 / 255.0),
            srgb_to_linear(b as f32 / 255.0),
            a as f32 / 255.0,
        )
    }

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`.
    ///
    /// The leading `#` is required, matching the format preferences and style
    /// attributes use.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError(s.to_string());

        let digits = s.strip_prefix('#').ok_or_else(err)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| err())?;

        let argb = match digits.len() {
            6 => 0xFF00_0000 | value,
            8 => value,
            _ => return Err(err()),
        };

        let [a, r, g, b] = argb.to_be_bytes();
        Ok(Self::from_srgb_u8(r, g, b, a))
    }

    /// Returns straight sRGB bytes `(r, g, b, a)`.
    #[inline]
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(linear_to_srgb(r)), q(linear_to_srgb(g)), q(linear_to_srgb(b)), q(a)]
    }

    /// Blends toward `other` by `ratio` (`0.0` = self, `1.0` = other).
    ///
    /// Interpolation happens per channel on straight sRGB components, so a 30% blend
    /// toward black darkens the way a designer picking colors expects.
    pub fn blend(self, other: Color, ratio: f32) -> Color {
        let t = ratio.clamp(0.0, 1.0);
        let inv = 1.0 - t;

        let (r0, g0, b0, a0) = self.to_straight();
        let (r1, g1, b1, a1) = other.to_straight();
        let mix = |x: f32, y: f32| {
            srgb_to_linear(linear_to_srgb(x) * inv + linear_to_srgb(y) * t)
        };

        Self::from_straight(mix(r0, r1), mix(g0, g1), mix(b0, b1), a0 * inv + a1 * t)
    }

    /// Debug-only validation: asserts that RGB channels do not exceed alpha,
    /// which would indicate a straight-alpha color was passed where premul was expected.
    ///
    /// No-op in release builds.
    #[inline]
    pub fn debug_assert_premul(self) {
        debug_assert!(
            self.r <= self.a + f32::EPSILON
                && self.g <= self.a + f32::EPSILON
                && self.b <= self.a + f32::EPSILON,
            "Color::debug_assert_premul: {self:?} looks like straight alpha passed as premul",
        );
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
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

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    /// Formats as `#RRGGBB`, or `#AARRGGBB` when translucent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_srgb_u8();
        if a == 0xFF {
            write!(f, "#{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "#{a:02X}{r:02X}{g:02X}{b:02X}")
        }
    }
}

#[inline]
fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 { v / 12.92 } else { ((v + 0.055) / 1.055).powf(2.4) }
}

#[inline]
fn linear_to_srgb(v: f32) -> f32 {
    if v <= 0.0031308 { v * 12.92 } else { 1.055 * v.powf(1.0 / 2.4) - 0.055 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_rgb_round_trips_through_display() {
        let c = Color::from_hex("#FEF7FF").unwrap();
        assert_eq!(c.to_srgb_u8(), [0xFE, 0xF7, 0xFF, 0xFF]);
        assert_eq!(c.to_string(), "#FEF7FF");
    }

    #[test]
    fn hex_argb_keeps_alpha() {
        let c = Color::from_hex("#80C90000").unwrap();
        assert_eq!(c.to_srgb_u8(), [0xC9, 0x00, 0x00, 0x80]);
        c.debug_assert_premul();
    }

    #[test]
    fn hex_is_case_insensitive() {
        assert_eq!(Color::from_hex("#1d1b20"), Color::from_hex("#1D1B20"));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for bad in ["FEF7FF", "#FEF7F", "#GGGGGG", "#", "", "#+EF7FF", "#FFFFFFFFF"] {
            assert_eq!(Color::from_hex(bad), Err(ColorParseError(bad.to_string())), "{bad}");
        }
    }

    #[test]
    fn blend_endpoints() {
        let bg = Color::from_hex("#FEF7FF").unwrap();
        assert_eq!(bg.blend(Color::BLACK, 0.0).to_srgb_u8(), bg.to_srgb_u8());
        assert_eq!(bg.blend(Color::BLACK, 1.0).to_srgb_u8(), [0, 0, 0, 255]);
    }

    #[test]
    fn blend_thirty_percent_toward_black_scales_srgb_channels() {
        let bg = Color::from_hex("#FEF7FF").unwrap();
        let [r, g, b, a] = bg.blend(Color::BLACK, 0.3).to_srgb_u8();
        // 0xFE * 0.7 = 177.8, 0xF7 * 0.7 = 172.9, 0xFF * 0.7 = 178.5
        assert!((r as i32 - 178).abs() <= 1);
        assert!((g as i32 - 173).abs() <= 1);
        assert!((b as i32 - 178).abs() <= 1);
        assert_eq!(a, 255);
    }

    #[test]
    fn blend_toward_white_lightens() {
        let c = Color::from_hex("#000000").unwrap().blend(Color::WHITE, 0.3);
        let [r, g, b, _] = c.to_srgb_u8();
        assert!((r as i32 - 77).abs() <= 1 && r == g && g == b);
    }
}
