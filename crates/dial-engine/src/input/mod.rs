//! Keyboard input.
//!
//! The public types do not expose winit; the runtime translates platform
//! events into [`InputEvent`]s and dispatches them to the app as they arrive.

mod platform;
mod state;
mod types;

pub(crate) use platform::translate_keyboard;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers};
