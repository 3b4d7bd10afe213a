//! In-memory item inventory with quantity tracking.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{CatalogItem, InventoryEntry, ItemId};

#[derive(Debug, Clone, Default)]
/// Items the user is tracking, keyed by catalog id.
///
/// A `BTreeMap` keeps iteration order stable for presentation layers.
pub struct Inventory {
    entries: BTreeMap<ItemId, InventoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One persisted inventory entry.
pub struct StoredEntry {
    /// Catalog id of the item.
    pub item_id: ItemId,
    /// Held quantity.
    pub quantity: u32,
    /// Full item snapshot so the inventory renders without a catalog fetch.
    pub item: CatalogItem,
}

/// Serialized shape of a whole inventory.
pub type InventoryState = Vec<StoredEntry>;

impl Inventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `item`, merging with an existing entry.
    pub fn add(&mut self, item: CatalogItem, quantity: u32) {
        self.entries
            .entry(item.id)
            .and_modify(|entry| entry.quantity = entry.quantity.saturating_add(quantity))
            .or_insert(InventoryEntry { item, quantity });
    }

    /// Drop an item entirely, returning the removed entry if it existed.
    pub fn remove(&mut self, id: ItemId) -> Option<InventoryEntry> {
        self.entries.remove(&id)
    }

    /// Adjust an item's quantity by `delta`.
    ///
    /// Entries reaching a quantity of zero or below are removed. Adjusting
    /// an item that is not held is a no-op.
    pub fn adjust(&mut self, id: ItemId, delta: i64) {
        let Some(entry) = self.entries.get_mut(&id) else {
            return;
        };
        let adjusted = i64::from(entry.quantity) + delta;
        if adjusted <= 0 {
            self.entries.remove(&id);
        } else {
            entry.quantity = u32::try_from(adjusted).unwrap_or(u32::MAX);
        }
    }

    /// Quantity held of an item, zero when absent.
    #[must_use]
    pub fn quantity(&self, id: ItemId) -> u32 {
        self.entries.get(&id).map_or(0, |entry| entry.quantity)
    }

    /// Iterator over held entries in id order.
    pub fn entries(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.entries.values()
    }

    /// Number of distinct items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot for persistence.
    #[must_use]
    pub fn to_state(&self) -> InventoryState {
        self.entries
            .values()
            .map(|entry| StoredEntry {
                item_id: entry.item.id,
                quantity: entry.quantity,
                item: entry.item.clone(),
            })
            .collect()
    }

    /// Rebuild an inventory from a persisted snapshot.
    ///
    /// Duplicate ids in the snapshot merge their quantities; zero-quantity
    /// entries are discarded.
    #[must_use]
    pub fn from_state(state: InventoryState) -> Self {
        let mut inventory = Self::new();
        for stored in state {
            if stored.quantity > 0 {
                inventory.add(stored.item, stored.quantity);
            }
        }
        inventory
    }
}
