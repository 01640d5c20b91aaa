use super::Vec2;

/// Drawable area in logical pixels; shaders map it onto NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Converts a physical surface size using the window's scale factor.
    ///
    /// A non-positive or non-finite scale is treated as 1.
    pub fn from_physical(width: u32, height: u32, scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        Self::new((f64::from(width) / scale) as f32, (f64::from(height) / scale) as f32)
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Something can be drawn: both sides positive and finite.
    #[inline]
    pub fn is_valid(self) -> bool {
        [self.width, self.height].iter().all(|v| v.is_finite() && *v > 0.0)
    }
}
