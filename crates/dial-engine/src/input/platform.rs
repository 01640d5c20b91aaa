use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use super::{InputEvent, InputState, Key, KeyState, Modifiers};

const LETTERS: [(KeyCode, Key); 26] = [
    (KeyCode::KeyA, Key::A), (KeyCode::KeyB, Key::B), (KeyCode::KeyC, Key::C),
    (KeyCode::KeyD, Key::D), (KeyCode::KeyE, Key::E), (KeyCode::KeyF, Key::F),
    (KeyCode::KeyG, Key::G), (KeyCode::KeyH, Key::H), (KeyCode::KeyI, Key::I),
    (KeyCode::KeyJ, Key::J), (KeyCode::KeyK, Key::K), (KeyCode::KeyL, Key::L),
    (KeyCode::KeyM, Key::M), (KeyCode::KeyN, Key::N), (KeyCode::KeyO, Key::O),
    (KeyCode::KeyP, Key::P), (KeyCode::KeyQ, Key::Q), (KeyCode::KeyR, Key::R),
    (KeyCode::KeyS, Key::S), (KeyCode::KeyT, Key::T), (KeyCode::KeyU, Key::U),
    (KeyCode::KeyV, Key::V), (KeyCode::KeyW, Key::W), (KeyCode::KeyX, Key::X),
    (KeyCode::KeyY, Key::Y), (KeyCode::KeyZ, Key::Z),
];

const DIGITS: [(KeyCode, KeyCode, Key); 10] = [
    (KeyCode::Digit0, KeyCode::Numpad0, Key::Digit0),
    (KeyCode::Digit1, KeyCode::Numpad1, Key::Digit1),
    (KeyCode::Digit2, KeyCode::Numpad2, Key::Digit2),
    (KeyCode::Digit3, KeyCode::Numpad3, Key::Digit3),
    (KeyCode::Digit4, KeyCode::Numpad4, Key::Digit4),
    (KeyCode::Digit5, KeyCode::Numpad5, Key::Digit5),
    (KeyCode::Digit6, KeyCode::Numpad6, Key::Digit6),
    (KeyCode::Digit7, KeyCode::Numpad7, Key::Digit7),
    (KeyCode::Digit8, KeyCode::Numpad8, Key::Digit8),
    (KeyCode::Digit9, KeyCode::Numpad9, Key::Digit9),
];

/// Translates the keyboard-related subset of winit window events.
///
/// Returns `None` for everything else.
pub(crate) fn translate_keyboard(state: &InputState, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => {
            Some(InputEvent::ModifiersChanged(map_modifiers(m.state())))
        }
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),
        WindowEvent::KeyboardInput { event, .. } => Some(InputEvent::Key {
            key: map_key(event.physical_key),
            state: match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            },
            // winit 0.30 reports modifiers separately; use the tracked ones.
            modifiers: state.modifiers,
            repeat: event.repeat,
        }),
        _ => None,
    }
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        return Key::Unknown(0);
    };

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Space => Key::Space,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        _ => LETTERS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, k)| *k)
            .or_else(|| {
                DIGITS
                    .iter()
                    .find(|(row, pad, _)| *row == code || *pad == code)
                    .map(|(_, _, k)| *k)
            })
            .unwrap_or(Key::Unknown(code as u32)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_letters_digits_and_arrows() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyS)), Key::S);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Digit3)), Key::Digit3);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Numpad1)), Key::Digit1);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowUp)), Key::ArrowUp);
    }

    #[test]
    fn unmapped_keys_are_unknown() {
        assert!(matches!(map_key(PhysicalKey::Code(KeyCode::F5)), Key::Unknown(_)));
    }
}
