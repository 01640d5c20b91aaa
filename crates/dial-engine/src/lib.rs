//! Dial engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the clock face and
//! its hosts, plus the renderer-agnostic draw stream the face records into.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
