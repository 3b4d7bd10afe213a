//! Provider for Victorian (AU) public holidays, served from a dataset
//! bundled at compile time.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use wattle_core::{
    model::{RegionId, RegionMeta},
    ports::{HolidayPort, PortError},
};

/// Year-bucketed holiday dates, as published by the Victorian government.
const DATASET: &str = include_str!("../data/holidays.json");

/// Public-holiday port for Victoria.
pub struct VicHolidayPort {
    meta: RegionMeta,
    by_year: HashMap<i32, Vec<String>>,
}

impl VicHolidayPort {
    /// Load the bundled dataset.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::MalformedData`] when the bundled JSON does not
    /// decode; this indicates a broken build, not a runtime condition.
    pub fn new() -> Result<Self, PortError> {
        let by_year: HashMap<i32, Vec<String>> =
            serde_json::from_str(DATASET).map_err(|err| PortError::MalformedData(err.to_string()))?;
        Ok(Self {
            meta: region_meta(),
            by_year,
        })
    }
}

#[async_trait]
impl HolidayPort for VicHolidayPort {
    fn region(&self) -> &RegionMeta {
        &self.meta
    }

    async fn holidays(&self, year: i32) -> Result<Vec<String>, PortError> {
        Ok(self.by_year.get(&year).cloned().unwrap_or_default())
    }
}

/// Build the holiday port for Victoria.
///
/// # Errors
///
/// Returns [`PortError::MalformedData`] when the bundled dataset is broken.
pub fn port() -> Result<Arc<dyn HolidayPort>, PortError> {
    Ok(Arc::new(VicHolidayPort::new()?))
}

fn region_meta() -> RegionMeta {
    RegionMeta {
        id: RegionId(String::from("vic")),
        name: String::from("Victoria, Australia"),
    }
}
