//! Font loading and text measurement.
//!
//! Fonts are parsed with `fontdue`. The same [`FontSystem`] is shared by the
//! text renderer (rasterization) and by the face (numeral placement).

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
