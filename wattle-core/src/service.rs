//! High-level service facade combining schedule, holiday, and catalog concerns.

use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::model::{BinScheduleInfo, CatalogItem, HolidaySet, RegionMeta, ScheduleMode};
use crate::ports::{HolidayPort, ItemCatalogPort, PortError};
use crate::schedule::{ScheduleConfig, ScheduleError, compute_schedule, normalize};

#[derive(thiserror::Error, Debug)]
/// Errors surfaced by [`WattleService`].
pub enum ServiceError {
    /// A provider backend failed.
    #[error(transparent)]
    Port(#[from] PortError),
    /// The schedule calculation failed.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Public entry point for bin schedules and the item catalog.
pub struct WattleService {
    holiday_port: Arc<dyn HolidayPort>,
    catalog_port: Arc<dyn ItemCatalogPort>,
    config: ScheduleConfig,
}

impl WattleService {
    /// Create a new service bound to the provided ports.
    #[must_use]
    pub fn new(holiday_port: Arc<dyn HolidayPort>, catalog_port: Arc<dyn ItemCatalogPort>) -> Self {
        Self {
            holiday_port,
            catalog_port,
            config: ScheduleConfig::default(),
        }
    }

    /// Metadata for the region the holiday data covers.
    #[must_use]
    pub fn holiday_region(&self) -> &RegionMeta {
        self.holiday_port.region()
    }

    /// Compute the bin schedule for `now`.
    ///
    /// Holiday data is pulled for the civil year of `now` and the following
    /// year, so a collection day rolling over New Year still sees its
    /// holidays. Malformed holiday entries are dropped, not fatal.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] when the holiday provider fails or the
    /// configured timezone cannot be resolved.
    pub async fn bin_schedule(
        &self,
        now: DateTime<Utc>,
        mode: ScheduleMode,
    ) -> Result<BinScheduleInfo, ServiceError> {
        let civil_year = normalize(now, &self.config)?.year();

        let mut raw = self.holiday_port.holidays(civil_year).await?;
        raw.extend(self.holiday_port.holidays(civil_year + 1).await?);

        let holidays = parse_holidays(&raw);
        debug!(
            year = civil_year,
            holidays = holidays.len(),
            "computing bin schedule"
        );

        Ok(compute_schedule(now, &holidays, mode, &self.config)?)
    }

    /// Fetch the complete item catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the catalog request fails.
    pub async fn catalog_items(&self) -> Result<Vec<CatalogItem>, PortError> {
        let items = self.catalog_port.all_items().await?;
        debug!(
            source = self.catalog_port.source(),
            items = items.len(),
            "fetched item catalog"
        );
        Ok(items)
    }
}

/// Parse raw holiday strings into a [`HolidaySet`].
///
/// Accepts plain ISO dates (`2026-01-26`) and RFC 3339 datetimes, whose own
/// offset determines the civil date. Entries that parse as neither are
/// logged and skipped; they never fail the calculation.
#[must_use]
pub fn parse_holidays(raw: &[String]) -> HolidaySet {
    let mut holidays = HolidaySet::new();
    for entry in raw {
        match parse_holiday_entry(entry) {
            Some(date) => {
                holidays.insert(date);
            }
            None => warn!(%entry, "skipping malformed holiday date"),
        }
    }
    holidays
}

fn parse_holiday_entry(entry: &str) -> Option<NaiveDate> {
    let trimmed = entry.trim();
    if let Ok(date) = trimmed.parse::<NaiveDate>() {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.date_naive())
}

/// Case-insensitive substring search over catalog item names.
///
/// A blank query returns every item.
#[must_use]
pub fn search_items(query: &str, items: &[CatalogItem]) -> Vec<CatalogItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
