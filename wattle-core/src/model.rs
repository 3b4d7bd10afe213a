//! Domain data structures for bin schedules, holidays, and catalog items.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Which of the two waste streams is collected in a given week.
pub enum BinType {
    /// Green-lid organics bin.
    Organic,
    /// Yellow-lid recycling bin.
    Recyclable,
}

impl BinType {
    /// Human-friendly label used by presentation layers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BinType::Organic => "Green bin",
            BinType::Recyclable => "Recycle bin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which collection-day occurrence a schedule query asks for.
pub enum ScheduleMode {
    /// The next strictly-future collection day.
    Upcoming,
    /// The collection day inside the week containing the query date,
    /// even if it has already passed.
    CurrentWeek,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Result of a bin schedule calculation.
pub struct BinScheduleInfo {
    /// Bin that goes out for the computed week.
    pub bin_type: BinType,
    /// Calendar day the bins are collected, after any holiday shift.
    pub collection_day: NaiveDate,
    /// Whether a public holiday moved the collection day.
    pub is_holiday_affected: bool,
    /// Human-readable note set when a holiday shift was applied.
    pub holiday_message: Option<String>,
}

/// Set of civil dates on which no collection runs.
///
/// Membership is tested by exact calendar-date equality in the schedule's
/// fixed timezone.
pub type HolidaySet = HashSet<NaiveDate>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a holiday region known to wattle.
pub struct RegionId(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Metadata describing a holiday region and its human-friendly name.
pub struct RegionMeta {
    /// Unique identifier.
    pub id: RegionId,
    /// Localized display name.
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Identifier for an item in the remote catalog.
pub struct ItemId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Item returned from the remote catalog.
pub struct CatalogItem {
    /// Unique identifier assigned by the catalog.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Flavor/usage description.
    pub description: String,
    /// Rarity tier.
    pub rarity: u8,
    /// Maximum number a hunter can carry at once.
    pub carry_limit: u32,
    /// Sell value in zenny.
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Catalog item held in the inventory together with its quantity.
pub struct InventoryEntry {
    /// The catalog item.
    pub item: CatalogItem,
    /// How many of it are held.
    pub quantity: u32,
}
