//! JSON-file persistence for the inventory, the desktop stand-in for the
//! browser's local storage.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;
use wattle_core::inventory::{Inventory, InventoryState};

/// File name used when no explicit path is configured.
pub(crate) const DEFAULT_STORE_FILE: &str = "wattle-inventory.json";

/// Loads and saves the inventory as a JSON document on disk.
pub(crate) struct InventoryStore {
    path: PathBuf,
}

impl InventoryStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored inventory.
    ///
    /// A missing or corrupted store file yields an empty inventory rather
    /// than an error; the next save overwrites it.
    pub(crate) fn load(&self) -> Inventory {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Inventory::new();
        };
        match serde_json::from_str::<InventoryState>(&raw) {
            Ok(state) => Inventory::from_state(state),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    %err,
                    "discarding corrupted inventory store"
                );
                Inventory::new()
            }
        }
    }

    /// Write the inventory back to disk.
    pub(crate) fn save(&self, inventory: &Inventory) -> Result<()> {
        let body = serde_json::to_string_pretty(&inventory.to_state())
            .context("serializing inventory")?;
        fs::write(&self.path, body)
            .with_context(|| format!("writing inventory store {}", self.path.display()))
    }
}
