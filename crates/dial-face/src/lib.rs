//! Analog clock face.
//!
//! [`ClockFaceRenderer`] turns a [`ClockConfig`] and a [`TimeSample`] into a
//! `dial_engine::scene::DrawList`: the round face, 60 markers, optional hour
//! numerals, up to three hands and the hub. [`ClockFace`] wraps the renderer
//! with the per-second tick sound.

pub mod config;
pub mod error;
pub mod face;
pub mod geometry;
pub mod metrics;
pub mod renderer;
pub mod tick;
pub mod time;

pub use config::{ClockConfig, HandStyle, MarkerStyle, NumeralStyle, Ratio, SoundSettings};
pub use error::ConfigError;
pub use face::ClockFace;
pub use geometry::FaceGeometry;
pub use metrics::GlyphMetrics;
pub use renderer::{layers, ClockFaceRenderer};
pub use tick::{AudioCue, CueSlot, TickGate, TickSound};
pub use time::{ClockSource, FixedClock, HandAngles, LocalClock, TimeSample};
