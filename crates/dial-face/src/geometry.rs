use dial_engine::coords::Vec2;

/// Center and radius of the face for one surface size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceGeometry {
    pub center: Vec2,
    pub radius: f32,
}

impl FaceGeometry {
    /// The largest circle centered in a `surface`-sized area.
    ///
    /// Negative or non-finite dimensions count as zero.
    pub fn from_surface(surface: Vec2) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let center = Vec2::new(clean(surface.x) / 2.0, clean(surface.y) / 2.0);
        Self { center, radius: center.x.min(center.y) }
    }

    /// Unit vector for a dial angle (degrees clockwise from 12 o'clock).
    pub fn direction(angle_deg: f32) -> Vec2 {
        Vec2::from_angle((angle_deg - 90.0).to_radians())
    }

    /// Point `distance` from the center along `angle_deg`.
    pub fn point_at(&self, angle_deg: f32, distance: f32) -> Vec2 {
        self.center + Self::direction(angle_deg) * distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn radius_is_half_the_short_side() {
        let g = FaceGeometry::from_surface(Vec2::new(400.0, 300.0));
        assert_eq!(g.center, Vec2::new(200.0, 150.0));
        assert_eq!(g.radius, 150.0);
    }

    #[test]
    fn degenerate_surfaces_collapse() {
        assert_eq!(FaceGeometry::from_surface(Vec2::new(0.0, 0.0)).radius, 0.0);
        assert_eq!(FaceGeometry::from_surface(Vec2::new(-20.0, 100.0)).radius, 0.0);
        assert_eq!(FaceGeometry::from_surface(Vec2::new(f32::NAN, 100.0)).radius, 0.0);
    }

    #[test]
    fn angles_run_clockwise_from_twelve() {
        let g = FaceGeometry::from_surface(Vec2::new(200.0, 200.0));
        assert!(close(g.point_at(0.0, 100.0), Vec2::new(100.0, 0.0)));
        assert!(close(g.point_at(90.0, 100.0), Vec2::new(200.0, 100.0)));
        assert!(close(g.point_at(180.0, 100.0), Vec2::new(100.0, 200.0)));
        assert!(close(g.point_at(270.0, 100.0), Vec2::new(0.0, 100.0)));
        assert!(close(g.point_at(360.0, 50.0), Vec2::new(100.0, 50.0)));
    }
}
