//! Clock face configuration.
//!
//! Every length and width is a [`Ratio`] of the face radius. Setters validate
//! all of their inputs before touching any field, so a rejected call leaves
//! the configuration exactly as it was.

use dial_engine::paint::Color;
use dial_engine::text::FontId;

use crate::error::ConfigError;

/// A fraction in `0.0..=1.0`.
///
/// Inputs above `1.0` are read as percentages: `50.0` becomes `0.5`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ratio(f32);

impl Ratio {
    pub const ZERO: Ratio = Ratio(0.0);
    pub const ONE: Ratio = Ratio(1.0);

    pub fn new(value: f32) -> Result<Self, ConfigError> {
        Self::named("ratio", value)
    }

    /// Like [`Ratio::new`], reporting `field` on failure.
    pub fn named(field: &'static str, value: f32) -> Result<Self, ConfigError> {
        let normalized = if value > 1.0 { value / 100.0 } else { value };
        if normalized.is_finite() && (0.0..=1.0).contains(&normalized) {
            Ok(Ratio(normalized))
        } else {
            Err(ConfigError::OutOfRange { field, value })
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    /// `length * ratio`.
    #[inline]
    pub fn of(self, length: f32) -> f32 {
        length * self.0
    }
}

impl TryFrom<f32> for Ratio {
    type Error = ConfigError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Ratio::new(value)
    }
}

// ── element styles ─────────────────────────────────────────────────────────

/// One ring of tick marks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle {
    pub visible: bool,
    /// Marker length as a fraction of the radius, measured inward from the rim.
    pub length: Ratio,
    pub color: Color,
    /// Stroke width in logical pixels.
    pub stroke: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    pub visible: bool,
    pub length: Ratio,
    pub width: Ratio,
    pub color: Color,
    /// Counterweight length as a fraction of the hand length.
    pub tail: f32,
}

/// Hour numerals 1..12.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NumeralStyle {
    pub visible: bool,
    /// Density-independent size; scaled by the radius at render time.
    pub size: f32,
    pub color: Color,
    pub font: FontId,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SoundSettings {
    pub enabled: bool,
    pub volume: Ratio,
}

// ── config ─────────────────────────────────────────────────────────────────

/// Full visual and audio configuration of a clock face.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    background: Color,
    minute_markers: MarkerStyle,
    hour_markers: MarkerStyle,
    numerals: NumeralStyle,
    hour_hand: HandStyle,
    minute_hand: HandStyle,
    second_hand: HandStyle,
    sound: SoundSettings,
}

impl ClockConfig {
    pub const HOUR_MARKER_STROKE: f32 = 5.0;
    pub const MINUTE_MARKER_STROKE: f32 = 3.0;
    pub const DEFAULT_TEXT_SIZE: f32 = 22.0;

    /// Face background, ink (minute markers, hour and minute hands) and accent
    /// (hour markers, second hand).
    fn default_colors() -> (Color, Color, Color) {
        let srgb = |r, g, b| Color::from_srgb_u8(r, g, b, 0xFF);
        (srgb(0xFE, 0xF7, 0xFF), srgb(0x1D, 0x1B, 0x20), srgb(0xC9, 0x00, 0x00))
    }

    // ── getters ────────────────────────────────────────────────────────────

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn minute_markers(&self) -> &MarkerStyle {
        &self.minute_markers
    }

    pub fn hour_markers(&self) -> &MarkerStyle {
        &self.hour_markers
    }

    pub fn numerals(&self) -> &NumeralStyle {
        &self.numerals
    }

    pub fn hour_hand(&self) -> &HandStyle {
        &self.hour_hand
    }

    pub fn minute_hand(&self) -> &HandStyle {
        &self.minute_hand
    }

    pub fn second_hand(&self) -> &HandStyle {
        &self.second_hand
    }

    /// Hands in paint order: hour, minute, second.
    pub fn hands(&self) -> [&HandStyle; 3] {
        [&self.hour_hand, &self.minute_hand, &self.second_hand]
    }

    pub fn any_hand_visible(&self) -> bool {
        self.hands().iter().any(|h| h.visible)
    }

    pub fn sound(&self) -> &SoundSettings {
        &self.sound
    }

    // ── setters ────────────────────────────────────────────────────────────

    pub fn set_background_color(&mut self, color: Color) {
        self.background = color;
    }

    pub fn set_marker_colors(&mut self, minute: Color, hour: Color) {
        self.minute_markers.color = minute;
        self.hour_markers.color = hour;
    }

    pub fn set_hand_colors(&mut self, second: Color, minute: Color, hour: Color) {
        self.second_hand.color = second;
        self.minute_hand.color = minute;
        self.hour_hand.color = hour;
    }

    pub fn set_marker_lengths(&mut self, minute: f32, hour: f32) -> Result<(), ConfigError> {
        let minute = Ratio::named("minute_marker_length", minute)?;
        let hour = Ratio::named("hour_marker_length", hour)?;
        self.minute_markers.length = minute;
        self.hour_markers.length = hour;
        Ok(())
    }

    pub fn set_hand_lengths(
        &mut self,
        second: f32,
        minute: f32,
        hour: f32,
    ) -> Result<(), ConfigError> {
        let second = Ratio::named("second_hand_length", second)?;
        let minute = Ratio::named("minute_hand_length", minute)?;
        let hour = Ratio::named("hour_hand_length", hour)?;
        self.second_hand.length = second;
        self.minute_hand.length = minute;
        self.hour_hand.length = hour;
        Ok(())
    }

    pub fn set_hand_widths(
        &mut self,
        second: f32,
        minute: f32,
        hour: f32,
    ) -> Result<(), ConfigError> {
        let second = Ratio::named("second_hand_width", second)?;
        let minute = Ratio::named("minute_hand_width", minute)?;
        let hour = Ratio::named("hour_hand_width", hour)?;
        self.second_hand.width = second;
        self.minute_hand.width = minute;
        self.hour_hand.width = hour;
        Ok(())
    }

    pub fn enable_markers(&mut self, minute: bool, hour: bool) {
        self.minute_markers.visible = minute;
        self.hour_markers.visible = hour;
    }

    pub fn enable_hands(&mut self, second: bool, minute: bool, hour: bool) {
        self.second_hand.visible = second;
        self.minute_hand.visible = minute;
        self.hour_hand.visible = hour;
    }

    pub fn enable_sound(&mut self, enabled: bool) {
        self.sound.enabled = enabled;
    }

    pub fn enable_hour_text(&mut self, enabled: bool) {
        self.numerals.visible = enabled;
    }

    pub fn set_volume(&mut self, volume: f32) -> Result<(), ConfigError> {
        self.sound.volume = Ratio::named("volume", volume)?;
        Ok(())
    }

    /// Sets the numeral size. Must be finite and non-negative.
    pub fn set_text_size(&mut self, size: f32) -> Result<(), ConfigError> {
        if !size.is_finite() || size < 0.0 {
            return Err(ConfigError::OutOfRange { field: "text_size", value: size });
        }
        self.numerals.size = size;
        Ok(())
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.numerals.color = color;
    }

    pub fn set_typeface(&mut self, font: FontId) {
        self.numerals.font = font;
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        let (background, ink, accent) = Self::default_colors();
        let hand = |visible, length, width, color, tail| HandStyle {
            visible,
            length: Ratio(length),
            width: Ratio(width),
            color,
            tail,
        };

        Self {
            background,
            minute_markers: MarkerStyle {
                visible: true,
                length: Ratio(0.05),
                color: ink,
                stroke: Self::MINUTE_MARKER_STROKE,
            },
            hour_markers: MarkerStyle {
                visible: true,
                length: Ratio(0.1),
                color: accent,
                stroke: Self::HOUR_MARKER_STROKE,
            },
            numerals: NumeralStyle {
                visible: true,
                size: Self::DEFAULT_TEXT_SIZE,
                color: Color::BLACK,
                font: FontId::default(),
            },
            hour_hand: hand(true, 0.5, 0.04, ink, 0.06),
            minute_hand: hand(true, 0.6, 0.03, ink, 0.08),
            second_hand: hand(true, 0.8, 0.02, accent, 0.2),
            sound: SoundSettings { enabled: true, volume: Ratio(0.1) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── ratio ──────────────────────────────────────────────────────────────

    #[test]
    fn percentages_are_normalized() {
        assert_eq!(Ratio::new(50.0).unwrap().get(), 0.5);
        assert_eq!(Ratio::new(100.0).unwrap().get(), 1.0);
        assert_eq!(Ratio::new(1.5).unwrap().get(), 0.015);
    }

    #[test]
    fn fractions_are_kept() {
        for v in [0.0, 0.02, 0.5, 1.0] {
            assert_eq!(Ratio::new(v).unwrap().get(), v);
        }
    }

    #[test]
    fn invalid_ratios_are_rejected() {
        for v in [-0.1, 100.5, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(Ratio::new(v).is_err(), "{v} accepted");
        }
        assert_eq!(
            Ratio::named("volume", -1.0),
            Err(ConfigError::OutOfRange { field: "volume", value: -1.0 })
        );
    }

    // ── defaults ───────────────────────────────────────────────────────────

    #[test]
    fn defaults_match_the_stock_face() {
        let c = ClockConfig::default();
        assert_eq!(c.background().to_srgb_u8(), [0xFE, 0xF7, 0xFF, 0xFF]);
        assert_eq!(c.minute_markers().color.to_srgb_u8(), [0x1D, 0x1B, 0x20, 0xFF]);
        assert_eq!(c.hour_markers().color.to_srgb_u8(), [0xC9, 0x00, 0x00, 0xFF]);
        assert_eq!(c.second_hand().color, c.hour_markers().color);
        assert_eq!(c.minute_hand().color, c.minute_markers().color);
        assert_eq!(c.hour_hand().color, c.minute_markers().color);

        assert_eq!(c.minute_markers().length.get(), 0.05);
        assert_eq!(c.hour_markers().length.get(), 0.1);
        assert_eq!(c.hour_hand().length.get(), 0.5);
        assert_eq!(c.minute_hand().length.get(), 0.6);
        assert_eq!(c.second_hand().length.get(), 0.8);
        assert_eq!(c.hour_hand().width.get(), 0.04);
        assert_eq!(c.minute_hand().width.get(), 0.03);
        assert_eq!(c.second_hand().width.get(), 0.02);

        assert_eq!(c.numerals().size, 22.0);
        assert_eq!(c.sound().volume.get(), 0.1);
        assert!(c.sound().enabled && c.numerals().visible && c.any_hand_visible());
    }

    // ── setters ────────────────────────────────────────────────────────────

    #[test]
    fn setters_normalize_percentages() {
        let mut c = ClockConfig::default();
        c.set_hand_lengths(90.0, 0.7, 40.0).unwrap();
        assert_eq!(c.second_hand().length.get(), 0.9);
        assert_eq!(c.minute_hand().length.get(), 0.7);
        assert_eq!(c.hour_hand().length.get(), 0.4);

        c.set_volume(30.0).unwrap();
        assert_eq!(c.sound().volume.get(), 0.3);
    }

    #[test]
    fn failed_setter_leaves_config_unchanged() {
        let mut c = ClockConfig::default();
        let before = c.clone();

        let err = c.set_hand_widths(0.01, 0.02, 250.0).unwrap_err();
        assert_eq!(err, ConfigError::OutOfRange { field: "hour_hand_width", value: 250.0 });
        assert_eq!(c, before);

        assert!(c.set_marker_lengths(f32::NAN, 0.2).is_err());
        assert!(c.set_text_size(-3.0).is_err());
        assert!(c.set_volume(-0.5).is_err());
        assert_eq!(c, before);
    }

    #[test]
    fn toggles_and_colors() {
        let mut c = ClockConfig::default();
        c.enable_hands(false, false, false);
        c.enable_markers(false, true);
        c.enable_hour_text(false);
        c.enable_sound(false);
        assert!(!c.any_hand_visible());
        assert!(!c.minute_markers().visible && c.hour_markers().visible);
        assert!(!c.numerals().visible && !c.sound().enabled);

        c.set_hand_colors(Color::WHITE, Color::BLACK, Color::WHITE);
        assert_eq!(c.second_hand().color, Color::WHITE);
        assert_eq!(c.minute_hand().color, Color::BLACK);
        c.set_text_color(Color::WHITE);
        assert_eq!(c.numerals().color, Color::WHITE);
    }
}
