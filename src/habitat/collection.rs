use bevy::prelude::*;

use super::{ItemKind, PlacedItem, PlacedItemId, Rotation};

/// The live collection of placed modules, in placement order.
#[derive(Resource, Debug, Clone, Default)]
pub struct Habitat {
    items: Vec<PlacedItem>,
    next_id: u64,
}

impl Habitat {
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: PlacedItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Place a new module with its top-left corner at (x, y)
    pub fn place(&mut self, kind: ItemKind, x: f32, y: f32) -> PlacedItemId {
        let id = PlacedItemId(self.next_id);
        self.next_id += 1;
        self.items.push(PlacedItem::new(id, kind, x, y));
        id
    }

    /// Returns false if no item has this id
    pub fn move_item(&mut self, id: PlacedItemId, x: f32, y: f32) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.x = x;
        item.y = y;
        true
    }

    /// Rotate by 90 degrees, returning the new orientation
    pub fn rotate(&mut self, id: PlacedItemId) -> Option<Rotation> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.rotation = item.rotation.rotated();
        Some(item.rotation)
    }

    pub fn remove(&mut self, id: PlacedItemId) -> Option<PlacedItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// First item (in placement order) whose footprint contains the point
    pub fn item_at(&self, point: Vec2) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.contains(point))
    }

    /// Swap in a restored collection (undo, redo, load).
    ///
    /// The id counter only ever moves forward so ids handed out later never
    /// collide with restored ones.
    pub fn replace_items(&mut self, items: Vec<PlacedItem>) {
        if let Some(max_id) = items.iter().map(|item| item.id.0).max() {
            self.next_id = self.next_id.max(max_id + 1);
        }
        self.items = items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_assigns_unique_ids_in_order() {
        let mut habitat = Habitat::default();
        let a = habitat.place(ItemKind::Dome, 0.0, 0.0);
        let b = habitat.place(ItemKind::Solar, 10.0, 10.0);
        assert_ne!(a, b);
        assert_eq!(habitat.len(), 2);
        assert_eq!(habitat.items()[0].id, a);
        assert_eq!(habitat.items()[1].id, b);
    }

    #[test]
    fn test_move_item_updates_position() {
        let mut habitat = Habitat::default();
        let id = habitat.place(ItemKind::Bed, 0.0, 0.0);
        assert!(habitat.move_item(id, 40.0, 60.0));
        let item = habitat.get(id).unwrap();
        assert_eq!((item.x, item.y), (40.0, 60.0));
    }

    #[test]
    fn test_move_unknown_item() {
        let mut habitat = Habitat::default();
        assert!(!habitat.move_item(PlacedItemId(42), 1.0, 1.0));
    }

    #[test]
    fn test_rotate_wraps() {
        let mut habitat = Habitat::default();
        let id = habitat.place(ItemKind::Water, 0.0, 0.0);
        assert_eq!(habitat.rotate(id), Some(Rotation::Deg90));
        habitat.rotate(id);
        habitat.rotate(id);
        assert_eq!(habitat.rotate(id), Some(Rotation::Deg0));
        assert_eq!(habitat.rotate(PlacedItemId(99)), None);
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let mut habitat = Habitat::default();
        let a = habitat.place(ItemKind::Dome, 0.0, 0.0);
        let b = habitat.place(ItemKind::Solar, 0.0, 0.0);
        let c = habitat.place(ItemKind::Plant, 0.0, 0.0);
        let removed = habitat.remove(b).unwrap();
        assert_eq!(removed.kind, ItemKind::Solar);
        let ids: Vec<_> = habitat.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(habitat.remove(b).is_none());
    }

    #[test]
    fn test_item_at_returns_first_hit() {
        let mut habitat = Habitat::default();
        let first = habitat.place(ItemKind::Dome, 0.0, 0.0);
        habitat.place(ItemKind::Plant, 10.0, 10.0);
        assert_eq!(habitat.item_at(Vec2::new(20.0, 20.0)).map(|i| i.id), Some(first));
        assert!(habitat.item_at(Vec2::new(500.0, 500.0)).is_none());
    }

    #[test]
    fn test_replace_items_advances_id_counter() {
        let mut habitat = Habitat::default();
        habitat.replace_items(vec![
            PlacedItem::new(PlacedItemId(7), ItemKind::Dome, 0.0, 0.0),
            PlacedItem::new(PlacedItemId(3), ItemKind::Bed, 0.0, 0.0),
        ]);
        let id = habitat.place(ItemKind::Solar, 0.0, 0.0);
        assert_eq!(id, PlacedItemId(8));
    }

    #[test]
    fn test_replace_with_empty_never_reuses_ids() {
        let mut habitat = Habitat::default();
        let a = habitat.place(ItemKind::Dome, 0.0, 0.0);
        habitat.replace_items(Vec::new());
        let b = habitat.place(ItemKind::Dome, 0.0, 0.0);
        assert_ne!(a, b);
    }
}
