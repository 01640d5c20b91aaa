//! Raised ring drawn around the face.

use dial_engine::coords::Vec2;
use dial_engine::scene::{DrawList, ZIndex};
use dial_face::{FaceGeometry, layers};

use crate::theme::Palette;

const RING_OUTER: f32 = 0.98;
const RING_INNER: f32 = 0.93;
const FACE_INSET: f32 = 0.88;

/// Behind every face layer.
pub const FRAME: ZIndex = ZIndex::new(layers::FACE.0 - 1);

/// Where the face goes inside the window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceSlot {
    /// Top-left of the face's square, in window coordinates.
    pub offset: Vec2,
    /// Surface size handed to the face renderer.
    pub size: Vec2,
}

impl FaceSlot {
    /// The face fills the window unless it is framed, in which case it is
    /// inset to leave room for the ring.
    pub fn for_window(window: Vec2, framed: bool) -> Self {
        if !framed {
            return Self { offset: Vec2::zero(), size: window };
        }

        let geometry = FaceGeometry::from_surface(window);
        let side = 2.0 * geometry.radius * FACE_INSET;
        let size = Vec2::new(side, side);
        Self { offset: geometry.center - size / 2.0, size }
    }
}

/// Pushes the two ring circles, lit edge first.
pub fn push_ring(list: &mut DrawList, window: Vec2, palette: &Palette) {
    let geometry = FaceGeometry::from_surface(window);
    if geometry.radius <= 0.0 {
        return;
    }
    list.push_circle(FRAME, geometry.center, geometry.radius * RING_OUTER, palette.frame_outer());
    list.push_circle(FRAME, geometry.center, geometry.radius * RING_INNER, palette.frame_inner());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn unframed_face_fills_the_window() {
        let window = Vec2::new(300.0, 200.0);
        let slot = FaceSlot::for_window(window, false);
        assert_eq!(slot, FaceSlot { offset: Vec2::zero(), size: window });
    }

    #[test]
    fn framed_face_is_centered_and_inset() {
        let slot = FaceSlot::for_window(Vec2::new(300.0, 200.0), true);
        let side = 200.0 * FACE_INSET;
        assert!((slot.size.x - side).abs() < 1e-3 && (slot.size.y - side).abs() < 1e-3);

        let center = slot.offset + slot.size / 2.0;
        assert!((center - Vec2::new(150.0, 100.0)).length() < 1e-3);
    }

    #[test]
    fn ring_is_two_circles_behind_the_face() {
        let mut list = DrawList::new();
        push_ring(&mut list, Vec2::new(200.0, 200.0), &Theme::Light.palette());

        assert_eq!(list.len(), 2);
        let radii: Vec<f32> = list.cmds().filter_map(|c| c.as_circle()).map(|c| c.radius).collect();
        assert!(radii[0] > radii[1]);
        assert!(radii[1] > 100.0 * FACE_INSET);
        assert!(list.items().iter().all(|item| item.key.z < layers::FACE));
    }

    #[test]
    fn zero_window_draws_no_ring() {
        let mut list = DrawList::new();
        push_ring(&mut list, Vec2::zero(), &Theme::Dark.palette());
        assert!(list.is_empty());
    }
}
