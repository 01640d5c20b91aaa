//! GPU device and surface management.
//!
//! [`Gpu`] creates the wgpu device for a window, keeps the swapchain
//! configured across resizes and hands out one [`GpuFrame`] per redraw.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
