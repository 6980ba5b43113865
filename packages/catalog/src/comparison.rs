//! Bounded, ordered set of items picked for side-by-side comparison.

use serde::Serialize;

use crate::types::item::ListingItem;

pub const COMPARISON_CAPACITY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
    AtCapacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Not present and the set is full
    Rejected,
}

/// Items held for comparison, in the order they were added.
///
/// Never holds more than [`COMPARISON_CAPACITY`] items or two items with the
/// same identifier. A full set refuses new items; nothing is evicted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComparisonSet {
    items: Vec<ListingItem>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: ListingItem) -> AddOutcome {
        if self.is_selected(&item.id) {
            return AddOutcome::AlreadyPresent;
        }
        if !self.can_add_more() {
            tracing::debug!(id = %item.id, "Comparison set full, ignoring add");
            return AddOutcome::AtCapacity;
        }
        self.items.push(item);
        AddOutcome::Added
    }

    /// Returns whether an item was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub fn toggle(&mut self, item: ListingItem) -> ToggleOutcome {
        if self.remove(&item.id) {
            return ToggleOutcome::Removed;
        }
        match self.add(item) {
            AddOutcome::Added => ToggleOutcome::Added,
            AddOutcome::AtCapacity | AddOutcome::AlreadyPresent => ToggleOutcome::Rejected,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn can_add_more(&self) -> bool {
        self.items.len() < COMPARISON_CAPACITY
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[ListingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
