//! Keyboard settings: each binding flips or steps one preference.

use dial_engine::input::{InputEvent, Key, KeyState, Modifiers};

use crate::prefs::Preferences;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
    ToggleSound,
    ToggleHourHand,
    ToggleMinuteHand,
    ToggleSecondHand,
    ToggleHourMarkers,
    ToggleMinuteMarkers,
    ToggleNumerals,
    ToggleFrame,
    ToggleTheme,
    VolumeUp,
    VolumeDown,
    /// Back to defaults, keeping the font path.
    Reset,
    Save,
    Quit,
}

impl Action {
    /// Maps a key press to an action. Auto-repeat only steps the volume.
    pub fn from_event(event: &InputEvent) -> Option<Self> {
        let InputEvent::Key { key, state: KeyState::Pressed, modifiers, repeat } = *event else {
            return None;
        };

        let action = Self::for_key(key, modifiers)?;
        if repeat && !matches!(action, Action::VolumeUp | Action::VolumeDown) {
            return None;
        }
        Some(action)
    }

    fn for_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        if modifiers.command() {
            return match key {
                Key::S => Some(Action::Save),
                Key::Q => Some(Action::Quit),
                _ => None,
            };
        }
        if modifiers.alt || modifiers.ctrl || modifiers.meta {
            return None;
        }

        let action = match key {
            Key::S => Action::ToggleSound,
            Key::Digit1 => Action::ToggleHourHand,
            Key::Digit2 => Action::ToggleMinuteHand,
            Key::Digit3 => Action::ToggleSecondHand,
            Key::H => Action::ToggleHourMarkers,
            Key::M => Action::ToggleMinuteMarkers,
            Key::N => Action::ToggleNumerals,
            Key::F => Action::ToggleFrame,
            Key::T => Action::ToggleTheme,
            Key::R => Action::Reset,
            Key::ArrowUp => Action::VolumeUp,
            Key::ArrowDown => Action::VolumeDown,
            Key::Escape => Action::Quit,
            _ => return None,
        };
        Some(action)
    }

    /// Applies the action to `prefs`. Returns `true` if a preference changed.
    ///
    /// `Save` and `Quit` leave preferences alone; the host handles them.
    pub fn apply(self, prefs: &mut Preferences) -> bool {
        let flip = |v: &mut bool| {
            *v = !*v;
            true
        };

        match self {
            Action::ToggleSound => flip(&mut prefs.sound),
            Action::ToggleHourHand => flip(&mut prefs.hour_hand),
            Action::ToggleMinuteHand => flip(&mut prefs.minute_hand),
            Action::ToggleSecondHand => flip(&mut prefs.second_hand),
            Action::ToggleHourMarkers => flip(&mut prefs.hour_marker),
            Action::ToggleMinuteMarkers => flip(&mut prefs.minute_marker),
            Action::ToggleNumerals => flip(&mut prefs.hour_text),
            Action::ToggleFrame => flip(&mut prefs.frame),
            Action::ToggleTheme => {
                prefs.theme = prefs.theme.toggled();
                true
            }
            Action::VolumeUp => prefs.volume_up(),
            Action::VolumeDown => prefs.volume_down(),
            Action::Reset => {
                let reset = Preferences { font: prefs.font.clone(), ..Preferences::default() };
                let changed = *prefs != reset;
                *prefs = reset;
                changed
            }
            Action::Save | Action::Quit => false,
        }
    }
}

/// One-line summary for the window title.
pub fn status_line(prefs: &Preferences) -> String {
    let sound = if prefs.sound { "on" } else { "off" };
    format!(
        "dial · sound {sound} · volume {}/{} · {} theme",
        prefs.volume,
        crate::prefs::MAX_VOLUME,
        prefs.theme.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            repeat: false,
        }
    }

    fn command(key: Key) -> InputEvent {
        let modifiers = if cfg!(target_os = "macos") {
            Modifiers { meta: true, ..Modifiers::default() }
        } else {
            Modifiers { ctrl: true, ..Modifiers::default() }
        };
        InputEvent::Key { key, state: KeyState::Pressed, modifiers, repeat: false }
    }

    // ── bindings ───────────────────────────────────────────────────────────

    #[test]
    fn plain_keys_map_to_toggles() {
        assert_eq!(Action::from_event(&press(Key::S)), Some(Action::ToggleSound));
        assert_eq!(Action::from_event(&press(Key::Digit3)), Some(Action::ToggleSecondHand));
        assert_eq!(Action::from_event(&press(Key::T)), Some(Action::ToggleTheme));
        assert_eq!(Action::from_event(&press(Key::Escape)), Some(Action::Quit));
        assert_eq!(Action::from_event(&press(Key::Z)), None);
    }

    #[test]
    fn command_s_saves_instead_of_toggling_sound() {
        assert_eq!(Action::from_event(&command(Key::S)), Some(Action::Save));
    }

    #[test]
    fn releases_are_ignored() {
        let event = InputEvent::Key {
            key: Key::S,
            state: KeyState::Released,
            modifiers: Modifiers::default(),
            repeat: false,
        };
        assert_eq!(Action::from_event(&event), None);
    }

    #[test]
    fn only_volume_auto_repeats() {
        let repeat = |key| InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            repeat: true,
        };
        assert_eq!(Action::from_event(&repeat(Key::ArrowUp)), Some(Action::VolumeUp));
        assert_eq!(Action::from_event(&repeat(Key::S)), None);
    }

    // ── effects ────────────────────────────────────────────────────────────

    #[test]
    fn toggles_flip_their_preference() {
        let mut prefs = Preferences::default();
        assert!(Action::ToggleMinuteMarkers.apply(&mut prefs));
        assert!(!prefs.minute_marker);
        assert!(Action::ToggleMinuteMarkers.apply(&mut prefs));
        assert!(prefs.minute_marker);

        assert!(Action::ToggleTheme.apply(&mut prefs));
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_font() {
        let mut prefs = Preferences {
            sound: false,
            volume: 9,
            font: Some("/fonts/face.ttf".into()),
            ..Preferences::default()
        };
        assert!(Action::Reset.apply(&mut prefs));
        assert!(prefs.sound);
        assert_eq!(prefs.volume, Preferences::default().volume);
        assert_eq!(prefs.font.as_deref(), Some(std::path::Path::new("/fonts/face.ttf")));

        assert!(!Action::Reset.apply(&mut prefs));
    }

    #[test]
    fn save_and_quit_change_nothing() {
        let mut prefs = Preferences::default();
        assert!(!Action::Save.apply(&mut prefs));
        assert!(!Action::Quit.apply(&mut prefs));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn status_line_reports_sound_and_volume() {
        let prefs = Preferences { sound: false, volume: 4, ..Preferences::default() };
        assert_eq!(status_line(&prefs), "dial · sound off · volume 4/10 · light theme");
    }
}
