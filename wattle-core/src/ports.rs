//! Traits describing provider capabilities and shared helper types.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use crate::model::{CatalogItem, RegionMeta};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to provider backends.
pub enum PortError {
    /// Network layer failed.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// Bundled provider data is unreadable.
    #[error("Malformed provider data: {0}")]
    MalformedData(String),
    /// Internal provider error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
/// Trait for public-holiday data sources.
///
/// Implementations hand back *raw* date strings bucketed by calendar year;
/// parsing (and dropping of malformed entries) happens in the service layer
/// so a sloppy dataset can never poison the schedule calculation.
pub trait HolidayPort: Send + Sync {
    /// Metadata describing the region covered by this port.
    fn region(&self) -> &RegionMeta;

    /// Raw holiday date strings for the given calendar year.
    ///
    /// A year the dataset does not cover yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the provider backend fails.
    async fn holidays(&self, year: i32) -> Result<Vec<String>, PortError>;
}

#[async_trait]
/// Trait for remote item-catalog backends.
pub trait ItemCatalogPort: Send + Sync {
    /// Human-friendly name of the catalog source.
    fn source(&self) -> &str;

    /// Fetch the complete item list.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the provider request fails.
    async fn all_items(&self) -> Result<Vec<CatalogItem>, PortError>;
}
