//! Typed dataset records.
//!
//! DESIGN
//! ======
//! Raw JSON is parsed and cross-checked once, at startup, into
//! [`CityEntries`]. After that nothing looks at raw JSON again and every
//! `CityId` held by the view state is known to have stats and a boundary.

pub mod entries;
pub mod stats;

pub use entries::{CityEntries, CityEntry};
pub use stats::{CityId, CityStats, parse_city_stats};

/// Error returned when the shipped dataset is inconsistent.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("city stats are not valid json: {0}")]
    StatsParse(#[source] serde_json::Error),
    #[error("stats for '{id}' are malformed: {source}")]
    InvalidStats {
        id: CityId,
        #[source]
        source: serde_json::Error,
    },
    #[error("city boundaries are malformed: {0}")]
    Boundaries(#[from] mapview::geo::GeoJsonError),
    #[error("boundary feature #{0} has no string 'id' property")]
    MissingBoundaryId(usize),
    #[error("boundary for '{0}' has no coordinates")]
    EmptyBoundary(CityId),
    #[error("boundary '{0}' has no stats record")]
    MissingStats(CityId),
    #[error("stats record '{0}' has no boundary")]
    MissingBoundary(CityId),
    #[error("unrecognized county '{county}' for {id}")]
    UnknownCounty { id: CityId, county: String },
}
