use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::input::{InputEvent, InputState};

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    /// Repaint the window now instead of waiting for the next timer tick.
    Redraw,
    Exit,
}

/// Application contract implemented by hosts.
pub trait App {
    /// Raw window events, before the runtime handles them.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Keyboard events, delivered as they arrive. `input` already reflects `event`.
    fn on_input(
        &mut self,
        window_id: WindowId,
        event: &InputEvent,
        input: &InputState,
    ) -> AppControl {
        let _ = (window_id, event, input);
        AppControl::Continue
    }

    /// The window was hidden (occluded, minimized) or shown again.
    ///
    /// The runtime pauses the window's redraw timer while it is hidden.
    fn on_visibility_changed(&mut self, window_id: WindowId, visible: bool) {
        let _ = (window_id, visible);
    }

    /// Called for every redraw of a visible window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
