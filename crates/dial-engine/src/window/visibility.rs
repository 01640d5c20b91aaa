/// Tracks whether a window can currently be seen.
///
/// A window is hidden while the compositor reports it occluded or while its
/// surface has zero area (minimized on most platforms).
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Visibility {
    occluded: bool,
    zero_sized: bool,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        !self.occluded && !self.zero_sized
    }

    /// Returns the new visibility if it changed.
    pub fn set_occluded(&mut self, occluded: bool) -> Option<bool> {
        self.update(|v| v.occluded = occluded)
    }

    /// Returns the new visibility if it changed.
    pub fn set_size(&mut self, width: u32, height: u32) -> Option<bool> {
        self.update(|v| v.zero_sized = width == 0 || height == 0)
    }

    fn update(&mut self, f: impl FnOnce(&mut Self)) -> Option<bool> {
        let before = self.is_visible();
        f(self);
        let after = self.is_visible();
        (before != after).then_some(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occlusion_toggles_visibility() {
        let mut v = Visibility::default();
        assert!(v.is_visible());
        assert_eq!(v.set_occluded(true), Some(false));
        assert_eq!(v.set_occluded(true), None);
        assert_eq!(v.set_occluded(false), Some(true));
    }

    #[test]
    fn zero_size_hides_until_restored() {
        let mut v = Visibility::default();
        assert_eq!(v.set_size(0, 0), Some(false));
        assert_eq!(v.set_size(0, 300), None);
        assert_eq!(v.set_size(300, 300), Some(true));
        assert_eq!(v.set_size(400, 300), None);
    }

    #[test]
    fn both_conditions_must_clear() {
        let mut v = Visibility::default();
        v.set_occluded(true);
        assert_eq!(v.set_size(0, 0), None);
        assert_eq!(v.set_occluded(false), None);
        assert!(!v.is_visible());
        assert_eq!(v.set_size(10, 10), Some(true));
    }
}
