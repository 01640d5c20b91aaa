use dial_engine::coords::Rect;
use dial_engine::text::{FontId, FontSystem};

/// Text measurement needed to center numerals.
pub trait GlyphMetrics {
    /// Inked area of `text` relative to the origin of a text draw command.
    fn ink_bounds(&self, text: &str, font: FontId, size: f32) -> Rect;
}

impl GlyphMetrics for FontSystem {
    fn ink_bounds(&self, text: &str, font: FontId, size: f32) -> Rect {
        FontSystem::ink_bounds(self, text, font, size)
    }
}
