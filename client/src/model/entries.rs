//! The validated city table.

#[cfg(test)]
#[path = "entries_test.rs"]
mod entries_test;

use std::collections::{HashMap, HashSet};

use mapview::geo::{FeatureCollection, LatLngBounds};
use mapview::hit::FEATURE_ID_PROPERTY;

use super::{CityId, CityStats, DataError};

/// A city's stats plus the bounds of its boundary shape.
#[derive(Debug, Clone, PartialEq)]
pub struct CityEntry {
    pub id: CityId,
    pub stats: CityStats,
    pub bounds: LatLngBounds,
}

/// Read-only table of cities, iterated in dataset order.
#[derive(Debug, Clone, Default)]
pub struct CityEntries {
    entries: Vec<CityEntry>,
    index: HashMap<CityId, usize>,
}

impl CityEntries {
    /// Join stats records with boundary features by id.
    ///
    /// Order follows `stats`. Every boundary needs a stats record and every
    /// stats record needs a boundary.
    ///
    /// # Errors
    ///
    /// Returns the first [`DataError`] found: a boundary without an id or
    /// coordinates, or an id present on only one side.
    pub fn build(stats: Vec<(CityId, CityStats)>, boundaries: &FeatureCollection) -> Result<Self, DataError> {
        let mut bounds_by_id = HashMap::with_capacity(boundaries.features.len());
        let mut boundary_order = Vec::with_capacity(boundaries.features.len());
        for (index, feature) in boundaries.features.iter().enumerate() {
            let id = feature.property_str(FEATURE_ID_PROPERTY).ok_or(DataError::MissingBoundaryId(index))?;
            let bounds = feature.bounds().ok_or_else(|| DataError::EmptyBoundary(id.to_owned()))?;
            bounds_by_id.insert(id.to_owned(), bounds);
            boundary_order.push(id);
        }

        let stats_ids = stats.iter().map(|(id, _)| id.as_str()).collect::<HashSet<_>>();
        if let Some(orphan) = boundary_order.iter().find(|id| !stats_ids.contains(**id)) {
            return Err(DataError::MissingStats((*orphan).to_owned()));
        }

        let mut entries = Vec::with_capacity(stats.len());
        let mut index = HashMap::with_capacity(stats.len());
        for (id, stats) in stats {
            let Some(bounds) = bounds_by_id.get(&id).copied() else {
                return Err(DataError::MissingBoundary(id));
            };
            index.insert(id.clone(), entries.len());
            entries.push(CityEntry { id, stats, bounds });
        }
        Ok(Self { entries, index })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CityEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Entries in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &CityEntry> {
        self.entries.iter()
    }

    /// City ids in dataset order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
