use std::sync::Arc;

use wattle_core::{
    inventory::Inventory,
    model::{BinScheduleInfo, CatalogItem, ItemId, ScheduleMode},
    service::{WattleService, search_items},
};

use crate::store::InventoryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Home,
    BinSchedule,
    Items,
}

/// Entries on the home menu, in display order.
pub(crate) const MENU: &[(Screen, &str)] = &[
    (Screen::BinSchedule, "Bin collection schedule"),
    (Screen::Items, "Monster Hunter items"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemsFocus {
    Results,
    Inventory,
}

pub(crate) struct App {
    pub service: Arc<WattleService>,
    pub store: InventoryStore,

    pub screen: Screen,
    pub menu_index: usize,

    pub schedule: Option<BinScheduleInfo>,
    pub schedule_mode: ScheduleMode,
    pub schedule_unavailable: Option<String>,

    pub catalog: Vec<CatalogItem>,
    pub catalog_loaded: bool,
    pub search_input: String,
    pub search_results: Vec<CatalogItem>,
    pub result_list_index: usize,
    pub inventory: Inventory,
    pub inventory_list_index: usize,
    pub items_focus: ItemsFocus,

    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: Arc<WattleService>, store: InventoryStore) -> Self {
        let inventory = store.load();
        Self {
            service,
            store,
            screen: Screen::Home,
            menu_index: 0,
            schedule: None,
            schedule_mode: ScheduleMode::Upcoming,
            schedule_unavailable: None,
            catalog: Vec::new(),
            catalog_loaded: false,
            search_input: String::new(),
            search_results: Vec::new(),
            result_list_index: 0,
            inventory,
            inventory_list_index: 0,
            items_focus: ItemsFocus::Results,
            is_loading: false,
            error_message: None,
        }
    }

    /// Re-run the pure name filter over the loaded catalog.
    pub(crate) fn refresh_search_results(&mut self) {
        self.search_results = search_items(&self.search_input, &self.catalog);
        if self.result_list_index >= self.search_results.len() {
            self.result_list_index = 0;
        }
    }

    pub(crate) fn selected_result(&self) -> Option<&CatalogItem> {
        self.search_results.get(self.result_list_index)
    }

    /// Catalog id of the inventory row under the cursor.
    pub(crate) fn selected_inventory_id(&self) -> Option<ItemId> {
        self.inventory
            .entries()
            .nth(self.inventory_list_index)
            .map(|entry| entry.item.id)
    }

    /// Keep the inventory cursor on a valid row after a mutation.
    pub(crate) fn clamp_inventory_cursor(&mut self) {
        if self.inventory_list_index >= self.inventory.len() {
            self.inventory_list_index = self.inventory.len().saturating_sub(1);
        }
    }

    pub(crate) fn toggle_schedule_mode(&mut self) {
        self.schedule_mode = match self.schedule_mode {
            ScheduleMode::Upcoming => ScheduleMode::CurrentWeek,
            ScheduleMode::CurrentWeek => ScheduleMode::Upcoming,
        };
    }
}
