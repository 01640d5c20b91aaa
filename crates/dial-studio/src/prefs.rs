use std::path::{Path, PathBuf};

use derive_more::From;
use dial_engine::paint::Color;
use dial_face::{ClockConfig, ConfigError};
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::Theme;

const FILE_NAME: &str = "preferences.toml";

/// Highest value of the `volume` key.
pub const MAX_VOLUME: u8 = 10;

/// User preferences, as stored in `preferences.toml`.
///
/// Every key is optional in the file; missing keys keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Preferences {
    pub sound: bool,
    pub second_hand: bool,
    pub minute_hand: bool,
    pub hour_hand: bool,
    pub hour_marker: bool,
    pub minute_marker: bool,
    pub hour_text: bool,
    pub frame: bool,
    /// `0..=10`; the face receives `volume / 10`.
    pub volume: u8,
    pub theme: Theme,
    /// Font used for the numerals. System fonts are searched when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
    /// Per-element colors laid over the theme palette.
    pub colors: ColorOverrides,
}

/// `#RRGGBB` or `#AARRGGBB` strings; unset entries keep the theme color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColorOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute_marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_hand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute_hand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_hand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ColorOverrides {
    /// Parses every set entry before touching `config`, so a bad string
    /// leaves it unchanged.
    pub fn apply(&self, config: &mut ClockConfig) -> Result<(), ConfigError> {
        let parse = |entry: &Option<String>, current: Color| -> Result<Color, ConfigError> {
            match entry {
                Some(hex) => Ok(Color::from_hex(hex.trim())?),
                None => Ok(current),
            }
        };

        let background = parse(&self.background, config.background())?;
        let minute_marker = parse(&self.minute_marker, config.minute_markers().color)?;
        let hour_marker = parse(&self.hour_marker, config.hour_markers().color)?;
        let hour_hand = parse(&self.hour_hand, config.hour_hand().color)?;
        let minute_hand = parse(&self.minute_hand, config.minute_hand().color)?;
        let second_hand = parse(&self.second_hand, config.second_hand().color)?;
        let text = parse(&self.text, config.numerals().color)?;

        config.set_background_color(background);
        config.set_marker_colors(minute_marker, hour_marker);
        config.set_hand_colors(second_hand, minute_hand, hour_hand);
        config.set_text_color(text);
        Ok(())
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sound: true,
            second_hand: true,
            minute_hand: true,
            hour_hand: true,
            hour_marker: true,
            minute_marker: true,
            hour_text: true,
            frame: true,
            volume: 1,
            theme: Theme::Light,
            font: None,
            colors: ColorOverrides::default(),
        }
    }
}

#[derive(Debug, From, Error)]
pub enum PreferencesError {
    #[error(
        "Failed to get configuration directory. Please specify the location using the `--config <path>` flag"
    )]
    NoDirectory,

    #[error("Failed to create config directory: {0}")]
    CreateDirectory(std::io::Error),

    #[error("Failed to parse preferences: {0}")]
    Parse(Box<figment::Error>),

    #[error("Failed to serialize preferences: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write preferences: {0}")]
    #[from(skip)]
    Write(std::io::Error),

    #[error("Invalid preference: {0}")]
    Config(ConfigError),
}

impl Preferences {
    /// Volume as a fraction in `0.0..=1.0`.
    pub fn volume_fraction(&self) -> f32 {
        f32::from(self.volume.min(MAX_VOLUME)) / f32::from(MAX_VOLUME)
    }

    pub fn volume_up(&mut self) -> bool {
        let next = self.volume.saturating_add(1).min(MAX_VOLUME);
        std::mem::replace(&mut self.volume, next) != next
    }

    pub fn volume_down(&mut self) -> bool {
        let next = self.volume.min(MAX_VOLUME).saturating_sub(1);
        std::mem::replace(&mut self.volume, next) != next
    }

    /// Snapshot of these preferences as a face configuration.
    ///
    /// Colors come from the theme palette, then the `[colors]` overrides. The
    /// numeral font stays at its default id for the host to set.
    pub fn to_clock_config(&self) -> Result<ClockConfig, PreferencesError> {
        let mut config = ClockConfig::default();
        self.theme.palette().apply(&mut config);
        self.colors.apply(&mut config)?;

        config.enable_hands(self.second_hand, self.minute_hand, self.hour_hand);
        config.enable_markers(self.minute_marker, self.hour_marker);
        config.enable_hour_text(self.hour_text);
        config.enable_sound(self.sound);
        config.set_volume(self.volume_fraction())?;

        Ok(config)
    }
}

/// Location of the preferences file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceFile {
    path: PathBuf,
}

impl PreferenceFile {
    /// Resolves the file inside `override_dir`, or the platform config
    /// directory when no override is given.
    pub fn locate(override_dir: Option<PathBuf>) -> Result<Self, PreferencesError> {
        let config_dir = override_dir
            .or_else(|| {
                ProjectDirs::from("com", "Dial", "Dial").map(|dirs| dirs.config_dir().to_path_buf())
            })
            .ok_or(PreferencesError::NoDirectory)?;

        Ok(Self::at(config_dir.join(FILE_NAME)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Defaults merged with the file, if it exists.
    pub fn load(&self) -> Result<Preferences, PreferencesError> {
        let mut figment = Figment::from(Serialized::defaults(Preferences::default()));

        if self.path.exists() {
            figment = figment.merge(Toml::file(&self.path));
        } else {
            log::debug!("no preferences at {}, using defaults", self.path.display());
        }

        let prefs = figment.extract().map_err(Box::new)?;
        Ok(prefs)
    }

    /// Writes every key, creating the parent directory if needed.
    pub fn save(&self, prefs: &Preferences) -> Result<(), PreferencesError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
        }

        let text = toml::to_string_pretty(prefs)?;
        std::fs::write(&self.path, text).map_err(PreferencesError::Write)?;

        log::info!("saved preferences to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_in(dir: &tempfile::TempDir) -> PreferenceFile {
        PreferenceFile::at(dir.path().join(FILE_NAME))
    }

    // ── loading ────────────────────────────────────────────────────────────

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = file_in(&dir).load().unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn file_overrides_only_the_keys_it_names() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir);
        std::fs::write(file.path(), "sound = false\nvolume = 7\ntheme = \"dark\"\n").unwrap();

        let prefs = file.load().unwrap();
        assert!(!prefs.sound);
        assert_eq!(prefs.volume, 7);
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(prefs.second_hand);
        assert!(prefs.frame);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir);
        std::fs::write(file.path(), "volume = \"loud\"\n").unwrap();

        assert!(matches!(file.load(), Err(PreferencesError::Parse(_))));
    }

    #[test]
    fn locate_uses_the_override_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = PreferenceFile::locate(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(file.path(), dir.path().join(FILE_NAME));
    }

    // ── saving ─────────────────────────────────────────────────────────────

    #[test]
    fn saved_preferences_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let file = PreferenceFile::at(dir.path().join("nested").join(FILE_NAME));

        let prefs = Preferences {
            hour_text: false,
            volume: 4,
            theme: Theme::Dark,
            ..Preferences::default()
        };
        file.save(&prefs).unwrap();

        assert_eq!(file.load().unwrap(), prefs);
    }

    // ── conversion ─────────────────────────────────────────────────────────

    #[test]
    fn volume_is_scaled_by_ten() {
        let prefs = Preferences { volume: 3, ..Preferences::default() };
        let config = prefs.to_clock_config().unwrap();
        assert!((config.sound().volume.get() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_volume_is_clamped() {
        let prefs = Preferences { volume: 40, ..Preferences::default() };
        assert_eq!(prefs.volume_fraction(), 1.0);
    }

    #[test]
    fn volume_steps_stop_at_the_bounds() {
        let mut prefs = Preferences { volume: MAX_VOLUME, ..Preferences::default() };
        assert!(!prefs.volume_up());
        assert!(prefs.volume_down());
        assert_eq!(prefs.volume, 9);

        prefs.volume = 0;
        assert!(!prefs.volume_down());
        assert_eq!(prefs.volume, 0);
    }

    #[test]
    fn toggles_flow_into_the_config() {
        let prefs = Preferences {
            sound: false,
            second_hand: false,
            hour_marker: false,
            hour_text: false,
            ..Preferences::default()
        };
        let config = prefs.to_clock_config().unwrap();

        assert!(!config.sound().enabled);
        assert!(!config.second_hand().visible);
        assert!(config.minute_hand().visible);
        assert!(!config.hour_markers().visible);
        assert!(config.minute_markers().visible);
        assert!(!config.numerals().visible);
    }

    #[test]
    fn light_theme_keeps_the_face_defaults() {
        let config = Preferences::default().to_clock_config().unwrap();
        let defaults = ClockConfig::default();

        assert_eq!(config.background(), defaults.background());
        assert_eq!(config.hour_markers().color, defaults.hour_markers().color);
        assert_eq!(config.second_hand().color, defaults.second_hand().color);
    }

    #[test]
    fn color_overrides_win_over_the_theme() {
        let dir = tempfile::tempdir().unwrap();
        let file = file_in(&dir);
        let text = "theme = \"dark\"\n\n[colors]\nsecond_hand = \"#00FF00\"\n";
        std::fs::write(file.path(), text).unwrap();

        let config = file.load().unwrap().to_clock_config().unwrap();
        assert_eq!(config.second_hand().color.to_srgb_u8(), [0x00, 0xFF, 0x00, 0xFF]);
        assert_eq!(config.background(), Theme::Dark.palette().face);
    }

    #[test]
    fn malformed_override_is_rejected_up_front() {
        let mut prefs = Preferences::default();
        prefs.colors.background = Some("#12345".to_string());
        prefs.colors.text = Some("#FFFFFF".to_string());

        let err = prefs.to_clock_config().unwrap_err();
        assert!(matches!(err, PreferencesError::Config(ConfigError::Color(_))), "{err}");

        let mut config = ClockConfig::default();
        assert!(prefs.colors.apply(&mut config).is_err());
        assert_eq!(config, ClockConfig::default());
    }

    #[test]
    fn dark_theme_darkens_the_face() {
        let prefs = Preferences { theme: Theme::Dark, ..Preferences::default() };
        let config = prefs.to_clock_config().unwrap();
        assert_ne!(config.background(), ClockConfig::default().background());
        assert_ne!(config.background(), Color::WHITE);
    }
}
