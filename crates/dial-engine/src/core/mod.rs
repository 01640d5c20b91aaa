//! Contract between the runtime and the application it hosts.
//!
//! The runtime owns windows, GPU surfaces and redraw timers; the application
//! sees them only through [`App`] callbacks and the per-frame [`FrameCtx`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
