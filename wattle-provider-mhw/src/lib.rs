//! Provider implementation for the Monster Hunter: World item catalog,
//! backed by the public MHW-DB API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use wattle_core::{
    model::{CatalogItem, ItemId},
    ports::{ItemCatalogPort, PortError},
};

const BASE_URL: &str = "https://mhw-db.com";

const SOURCE_NAME: &str = "MHW-DB";

/// Single item from /items
#[derive(Debug, Deserialize)]
struct ItemEntry {
    id: u32,
    name: String,

    #[serde(default)]
    description: String,

    #[serde(default)]
    rarity: u8,

    // carryLimit and value are null for a handful of account items.
    #[serde(rename = "carryLimit", default)]
    carry_limit: Option<u32>,

    #[serde(default)]
    value: Option<u32>,
}

/// Item catalog implementation for MHW-DB.
pub struct MhwCatalogPort {
    client: Client,
}

impl MhwCatalogPort {
    /// Create a new catalog port bound to the given HTTP client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ItemCatalogPort for MhwCatalogPort {
    fn source(&self) -> &str {
        SOURCE_NAME
    }

    async fn all_items(&self) -> Result<Vec<CatalogItem>, PortError> {
        let req = self.client.get(format!("{BASE_URL}/items"));
        let entries = fetch_json::<Vec<ItemEntry>>(req).await?;
        Ok(entries.into_iter().map(map_item).collect())
    }
}

/// Build the catalog port for the MHW-DB source.
#[must_use]
pub fn catalog(client: Client) -> Arc<dyn ItemCatalogPort> {
    Arc::new(MhwCatalogPort::new(client))
}

fn map_item(entry: ItemEntry) -> CatalogItem {
    CatalogItem {
        id: ItemId(entry.id),
        name: entry.name,
        description: entry.description,
        rarity: entry.rarity,
        carry_limit: entry.carry_limit.unwrap_or(0),
        value: entry.value.unwrap_or(0),
    }
}

// Small helper to fetch and decode JSON with status handling.
async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, PortError> {
    req.send()
        .await
        .map_err(PortError::from)?
        .error_for_status()
        .map_err(PortError::from)?
        .json()
        .await
        .map_err(PortError::from)
}
