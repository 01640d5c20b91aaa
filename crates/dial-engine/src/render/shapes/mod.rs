//! Instanced pipelines used by the scene renderer.

mod common;

pub(crate) mod glyph;
pub(crate) mod shape;
