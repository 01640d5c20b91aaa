use dial_engine::paint::Color;
use dial_face::ClockConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        let srgb = |r, g, b| Color::from_srgb_u8(r, g, b, 0xFF);
        match self {
            Theme::Light => Palette {
                window: srgb(0xF3, 0xED, 0xF7),
                face: srgb(0xFE, 0xF7, 0xFF),
                ink: srgb(0x1D, 0x1B, 0x20),
                accent: srgb(0xC9, 0x00, 0x00),
                text: Color::BLACK,
            },
            Theme::Dark => Palette {
                window: srgb(0x14, 0x12, 0x18),
                face: srgb(0x1D, 0x1B, 0x20),
                ink: srgb(0xE6, 0xE0, 0xE9),
                accent: srgb(0xC9, 0x00, 0x00),
                text: srgb(0xE6, 0xE0, 0xE9),
            },
        }
    }
}

/// Colors of one theme.
///
/// `ink` covers minute markers and the hour and minute hands, `accent` the hour
/// markers and the second hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    /// Clear color around the face.
    pub window: Color,
    pub face: Color,
    pub ink: Color,
    pub accent: Color,
    pub text: Color,
}

impl Palette {
    pub fn apply(&self, config: &mut ClockConfig) {
        config.set_background_color(self.face);
        config.set_marker_colors(self.ink, self.accent);
        config.set_hand_colors(self.accent, self.ink, self.ink);
        config.set_text_color(self.text);
    }

    /// Lit edge of the frame ring.
    pub fn frame_outer(&self) -> Color {
        self.window.blend(Color::WHITE, 0.35)
    }

    /// Shaded inner lip of the frame ring.
    pub fn frame_inner(&self) -> Color {
        self.window.blend(Color::BLACK, 0.15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_palette_leaves_defaults_untouched() {
        let mut config = ClockConfig::default();
        Theme::Light.palette().apply(&mut config);
        assert_eq!(config, ClockConfig::default());
    }

    #[test]
    fn dark_palette_inverts_face_and_ink() {
        let mut config = ClockConfig::default();
        Theme::Dark.palette().apply(&mut config);

        let defaults = ClockConfig::default();
        assert_eq!(config.background(), defaults.minute_markers().color);
        assert_eq!(config.minute_hand().color.to_srgb_u8(), [0xE6, 0xE0, 0xE9, 0xFF]);
        assert_eq!(config.second_hand().color, defaults.second_hand().color);
        assert_eq!(config.hour_markers().color, defaults.hour_markers().color);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn frame_edges_differ_from_window() {
        for theme in [Theme::Light, Theme::Dark] {
            let p = theme.palette();
            assert_ne!(p.frame_outer(), p.window);
            assert_ne!(p.frame_inner(), p.window);
        }
    }
}
