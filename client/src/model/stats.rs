//! City statistics records.
//!
//! Both sites share a base shape (`name`, `percentage`, `population`,
//! `reforms`, `url`). Site-specific fields (`cityType`, `contribution`,
//! `county`, ...) stay in an open extension map and are read through
//! capability methods, so adding a field to one site's data does not touch
//! the other.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::DataError;

/// Slug identifying a city, e.g. `st-louis-mo`. Unique within a dataset.
pub type CityId = String;

/// One row of `city-stats.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityStats {
    pub name: String,
    pub percentage: String,
    pub population: String,
    #[serde(default)]
    pub reforms: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CityStats {
    /// Non-empty string extension field.
    #[must_use]
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str).filter(|value| !value.is_empty())
    }

    /// Reform status, ignoring empty strings.
    #[must_use]
    pub fn reforms(&self) -> Option<&str> {
        self.reforms.as_deref().filter(|value| !value.is_empty())
    }

    /// Reform details link, ignoring empty strings.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|value| !value.is_empty())
    }

    /// Maintainer email for community-contributed maps.
    #[must_use]
    pub fn contribution(&self) -> Option<&str> {
        self.extra_str("contribution")
    }

    #[must_use]
    pub fn city_type(&self) -> Option<&str> {
        self.extra_str("cityType")
    }

    #[must_use]
    pub fn urbanized_area_population(&self) -> Option<&str> {
        self.extra_str("urbanizedAreaPopulation")
    }

    #[must_use]
    pub fn parking_score(&self) -> Option<&str> {
        self.extra_str("parkingScore")
    }

    #[must_use]
    pub fn county(&self) -> Option<&str> {
        self.extra_str("county")
    }

    #[must_use]
    pub fn transit_station(&self) -> Option<&str> {
        self.extra_str("transitStation")
    }
}

/// Parse `city-stats.json`, keeping file order.
///
/// # Errors
///
/// [`DataError::StatsParse`] if the document is not a JSON object,
/// [`DataError::InvalidStats`] naming the first malformed record.
pub fn parse_city_stats(raw: &str) -> Result<Vec<(CityId, CityStats)>, DataError> {
    let table: Map<String, Value> = serde_json::from_str(raw).map_err(DataError::StatsParse)?;
    table
        .into_iter()
        .map(|(id, value)| match serde_json::from_value::<CityStats>(value) {
            Ok(stats) => Ok((id, stats)),
            Err(source) => Err(DataError::InvalidStats { id, source }),
        })
        .collect()
}
