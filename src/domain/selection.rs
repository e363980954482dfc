use super::models::{Item, ItemId};

/// Ordered list of chosen items. Insertion order is the chip order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    items: Vec<Item>,
}

impl Selection {
    /// Appends `item`. Returns `false` (and changes nothing) if an item with
    /// the same id is already selected.
    pub fn add(&mut self, item: Item) -> bool {
        if self.contains(item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }
}
