//! Paint model shared between the face and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - parsing of `#RRGGBB` / `#AARRGGBB` color strings
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::{Color, ColorParseError};
