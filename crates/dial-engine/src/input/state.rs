use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current keyboard state for a single window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Folds `ev` into the state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered to unfocused windows.
                    self.keys_down.clear();
                    self.modifiers = Modifiers::default();
                }
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => {
                        self.keys_down.insert(*key);
                    }
                    KeyState::Released => {
                        self.keys_down.remove(key);
                    }
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), repeat }
    }

    #[test]
    fn tracks_held_keys() {
        let mut state = InputState::default();
        state.apply_event(&key(Key::S, KeyState::Pressed, false));
        assert!(state.key_down(Key::S));
        state.apply_event(&key(Key::S, KeyState::Released, false));
        assert!(!state.key_down(Key::S));
    }

    #[test]
    fn focus_loss_clears_keys_and_modifiers() {
        let mut state = InputState::default();
        let ctrl = Modifiers { ctrl: true, ..Default::default() };
        state.apply_event(&InputEvent::ModifiersChanged(ctrl));
        state.apply_event(&key(Key::A, KeyState::Pressed, false));
        state.apply_event(&InputEvent::Focused(false));
        assert!(!state.key_down(Key::A));
        assert!(!state.modifiers.any());
        assert!(!state.focused);
    }

    #[test]
    fn only_fresh_presses_count() {
        assert_eq!(key(Key::T, KeyState::Pressed, false).pressed_key(), Some(Key::T));
        assert_eq!(key(Key::T, KeyState::Pressed, true).pressed_key(), None);
        assert_eq!(key(Key::T, KeyState::Released, false).pressed_key(), None);
        assert_eq!(InputEvent::Focused(true).pressed_key(), None);
    }
}
