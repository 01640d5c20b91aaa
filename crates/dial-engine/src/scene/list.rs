use crate::coords::Vec2;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates commands in insertion order.
    pub fn cmds(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().map(|item| &item.cmd)
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Appends every item of `other` after the items already recorded here.
    ///
    /// Z-indices are kept; insertion order continues from this list.
    pub fn extend_from(&mut self, other: &DrawList) {
        for item in &other.items {
            self.push(item.key.z, item.cmd.clone());
        }
    }

    /// Like [`DrawList::extend_from`], shifting every appended command by `offset`.
    pub fn extend_translated(&mut self, other: &DrawList, offset: Vec2) {
        for item in &other.items {
            let mut cmd = item.cmd.clone();
            cmd.translate(offset);
            self.push(item.key.z, cmd);
        }
    }

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by `DrawList` and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut dl = DrawList::new();
        dl.push_circle(ZIndex(2), Vec2::zero(), 1.0, Color::BLACK);
        dl.push_circle(ZIndex(0), Vec2::zero(), 2.0, Color::BLACK);
        dl.push_circle(ZIndex(2), Vec2::zero(), 3.0, Color::BLACK);
        dl.push_circle(ZIndex(1), Vec2::zero(), 4.0, Color::BLACK);

        let radii: Vec<f32> = dl
            .iter_in_paint_order()
            .filter_map(|item| item.cmd.as_circle().map(|c| c.radius))
            .collect();
        assert_eq!(radii, vec![2.0, 4.0, 1.0, 3.0]);
    }

    #[test]
    fn clear_resets_order_and_items() {
        let mut dl = DrawList::new();
        dl.push_circle(ZIndex(0), Vec2::zero(), 1.0, Color::BLACK);
        dl.clear();
        assert!(dl.is_empty());

        dl.push_circle(ZIndex(0), Vec2::zero(), 1.0, Color::BLACK);
        assert_eq!(dl.items()[0].key.order, 0);
        assert_eq!(dl.indices_in_paint_order(), &[0]);
    }

    #[test]
    fn extend_from_appends_after_existing() {
        let mut base = DrawList::new();
        base.push_circle(ZIndex(0), Vec2::zero(), 1.0, Color::BLACK);

        let mut other = DrawList::new();
        other.push_line(ZIndex(3), Vec2::zero(), Vec2::new(1.0, 0.0), 1.0, Color::WHITE);

        base.extend_from(&other);
        assert_eq!(base.len(), 2);
        assert_eq!(base.items()[1].key, SortKey::new(ZIndex(3), 1));
        assert!(base.items()[1].cmd.as_line().is_some());
    }

    #[test]
    fn extend_translated_shifts_every_kind() {
        let mut inner = DrawList::new();
        inner.push_circle(ZIndex(0), Vec2::new(1.0, 1.0), 1.0, Color::BLACK);
        inner.push_line(ZIndex(0), Vec2::zero(), Vec2::new(2.0, 0.0), 1.0, Color::BLACK);

        let mut outer = DrawList::new();
        outer.extend_translated(&inner, Vec2::new(10.0, 20.0));

        let c = outer.items()[0].cmd.as_circle().unwrap();
        assert_eq!(c.center, Vec2::new(11.0, 21.0));
        let l = outer.items()[1].cmd.as_line().unwrap();
        assert_eq!((l.start, l.end), (Vec2::new(10.0, 20.0), Vec2::new(12.0, 20.0)));
    }
}
