//! winit event loop, windows and redraw scheduling.

mod runtime;
mod visibility;

pub use runtime::{Runtime, RuntimeConfig};
