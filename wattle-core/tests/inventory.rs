//! Inventory CRUD semantics and persistence snapshots.

use wattle_core::inventory::{Inventory, StoredEntry};
use wattle_core::model::{CatalogItem, ItemId};

fn item(id: u32, name: &str) -> CatalogItem {
    CatalogItem {
        id: ItemId(id),
        name: name.to_owned(),
        description: format!("{name} description"),
        rarity: 4,
        carry_limit: 10,
        value: 60,
    }
}

#[test]
fn adding_an_existing_item_merges_quantities() {
    let mut inventory = Inventory::new();
    inventory.add(item(1, "Potion"), 3);
    inventory.add(item(1, "Potion"), 2);

    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.quantity(ItemId(1)), 5);
}

#[test]
fn quantity_of_an_absent_item_is_zero() {
    let inventory = Inventory::new();
    assert_eq!(inventory.quantity(ItemId(42)), 0);
}

#[test]
fn adjust_below_one_removes_the_entry() {
    let mut inventory = Inventory::new();
    inventory.add(item(1, "Potion"), 2);

    inventory.adjust(ItemId(1), -1);
    assert_eq!(inventory.quantity(ItemId(1)), 1);

    inventory.adjust(ItemId(1), -1);
    assert_eq!(inventory.quantity(ItemId(1)), 0);
    assert!(inventory.is_empty(), "entry at zero must be dropped");
}

#[test]
fn adjust_of_an_absent_item_is_a_no_op() {
    let mut inventory = Inventory::new();
    inventory.adjust(ItemId(7), 5);
    assert!(inventory.is_empty());
}

#[test]
fn remove_returns_the_dropped_entry() {
    let mut inventory = Inventory::new();
    inventory.add(item(1, "Potion"), 3);

    let removed = inventory.remove(ItemId(1)).expect("entry exists");
    assert_eq!(removed.quantity, 3);
    assert!(inventory.remove(ItemId(1)).is_none());
}

#[test]
fn entries_iterate_in_id_order() {
    let mut inventory = Inventory::new();
    inventory.add(item(30, "Mega Potion"), 1);
    inventory.add(item(2, "Potion"), 1);
    inventory.add(item(11, "Ration"), 1);

    let ids: Vec<u32> = inventory.entries().map(|entry| entry.item.id.0).collect();
    assert_eq!(ids, vec![2, 11, 30]);
}

#[test]
fn state_round_trip_preserves_contents() {
    let mut inventory = Inventory::new();
    inventory.add(item(1, "Potion"), 3);
    inventory.add(item(5, "Herb"), 9);

    let rebuilt = Inventory::from_state(inventory.to_state());
    assert_eq!(rebuilt.len(), 2);
    assert_eq!(rebuilt.quantity(ItemId(1)), 3);
    assert_eq!(rebuilt.quantity(ItemId(5)), 9);
}

#[test]
fn from_state_discards_zero_quantities_and_merges_duplicates() {
    let state = vec![
        StoredEntry {
            item_id: ItemId(1),
            quantity: 0,
            item: item(1, "Potion"),
        },
        StoredEntry {
            item_id: ItemId(2),
            quantity: 2,
            item: item(2, "Herb"),
        },
        StoredEntry {
            item_id: ItemId(2),
            quantity: 3,
            item: item(2, "Herb"),
        },
    ];

    let inventory = Inventory::from_state(state);
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.quantity(ItemId(2)), 5);
}
