//! Geographic primitives and the GeoJSON subset the map draws.
//!
//! `LatLng` and `LatLngBounds` follow the usual web-map conventions: latitude
//! first, bounds stored as south-west / north-east corners, intersection tests
//! inclusive of shared edges. GeoJSON is parsed once into typed geometry so
//! nothing downstream pokes at raw JSON.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::consts::EARTH_RADIUS_M;

/// Error returned when GeoJSON input cannot be turned into typed geometry.
#[derive(Debug, thiserror::Error)]
pub enum GeoJsonError {
    /// The text is not valid JSON or does not have the GeoJSON shape.
    #[error("invalid geojson: {0}")]
    Parse(#[from] serde_json::Error),
    /// The geometry type is valid GeoJSON but not one the map renders.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(String),
    /// A coordinate had fewer than two components.
    #[error("coordinate must have at least 2 components, got {0}")]
    ShortPosition(usize),
}

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance in meters (haversine).
    #[must_use]
    pub fn distance_to(&self, other: LatLng) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let sin_d_lat = ((other.lat - self.lat).to_radians() / 2.0).sin();
        let sin_d_lng = ((other.lng - self.lng).to_radians() / 2.0).sin();
        let a = sin_d_lat * sin_d_lat + lat1.cos() * lat2.cos() * sin_d_lng * sin_d_lng;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

/// Axis-aligned geographic rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    #[must_use]
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self { south_west, north_east }
    }

    /// Smallest bounds containing every point, or `None` for an empty input.
    pub fn from_points(points: impl IntoIterator<Item = LatLng>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::new(first, first);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Grow the bounds to include `point`.
    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Grow the bounds to include `other`.
    pub fn extend_bounds(&mut self, other: &LatLngBounds) {
        self.extend(other.south_west);
        self.extend(other.north_east);
    }

    /// Midpoint of the rectangle in degrees.
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Whether the two rectangles overlap. Touching edges count.
    #[must_use]
    pub fn intersects(&self, other: &LatLngBounds) -> bool {
        let lat_intersects = other.north_east.lat >= self.south_west.lat && other.south_west.lat <= self.north_east.lat;
        let lng_intersects = other.north_east.lng >= self.south_west.lng && other.south_west.lng <= self.north_east.lng;
        lat_intersects && lng_intersects
    }

    /// Whether `point` lies inside or on the edge of the rectangle.
    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }
}

/// A closed ring of coordinates. The first ring of a polygon is its outer edge.
pub type Ring = Vec<LatLng>;

/// Polygonal geometry. Only areas are drawn on this map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawGeometry")]
pub enum Geometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Geometry {
    /// Every polygon in the geometry as a list of rings.
    #[must_use]
    pub fn polygons(&self) -> Vec<&[Ring]> {
        match self {
            Self::Polygon(rings) => vec![rings.as_slice()],
            Self::MultiPolygon(polys) => polys.iter().map(Vec::as_slice).collect(),
        }
    }

    /// Bounding box of every outer ring, or `None` when there are no points.
    #[must_use]
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let points = self
            .polygons()
            .into_iter()
            .filter_map(|rings| rings.first())
            .flat_map(|ring| ring.iter().copied())
            .collect::<Vec<_>>();
        LatLngBounds::from_points(points)
    }
}

/// One GeoJSON feature: geometry plus its free-form property bag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Map<String, Value>,
}

impl Feature {
    /// String-valued property, if present.
    #[must_use]
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.geometry.bounds()
    }
}

/// Ordered list of features, the unit in which data is added to a layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Parse a GeoJSON document holding either one `Feature` or a
    /// `FeatureCollection`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoJsonError`] for malformed JSON, unsupported geometry types,
    /// or short coordinate tuples.
    pub fn from_json(raw: &str) -> Result<Self, GeoJsonError> {
        let doc: RawDocument = serde_json::from_str(raw)?;
        Ok(doc.into())
    }

    /// Union of every feature's bounds.
    #[must_use]
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut iter = self.features.iter().filter_map(Feature::bounds);
        let mut bounds = iter.next()?;
        for b in iter {
            bounds.extend_bounds(&b);
        }
        Some(bounds)
    }
}

// =============================================================
// Wire shapes
// =============================================================

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawDocument {
    FeatureCollection { features: Vec<Feature> },
    Feature(Feature),
}

impl From<RawDocument> for FeatureCollection {
    fn from(doc: RawDocument) -> Self {
        match doc {
            RawDocument::FeatureCollection { features } => Self { features },
            RawDocument::Feature(feature) => Self { features: vec![feature] },
        }
    }
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Value,
}

impl TryFrom<RawGeometry> for Geometry {
    type Error = GeoJsonError;

    fn try_from(raw: RawGeometry) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            "Polygon" => {
                let rings: Vec<Vec<Vec<f64>>> = serde_json::from_value(raw.coordinates)?;
                Ok(Self::Polygon(convert_rings(rings)?))
            }
            "MultiPolygon" => {
                let polys: Vec<Vec<Vec<Vec<f64>>>> = serde_json::from_value(raw.coordinates)?;
                let polys = polys.into_iter().map(convert_rings).collect::<Result<Vec<_>, _>>()?;
                Ok(Self::MultiPolygon(polys))
            }
            other => Err(GeoJsonError::UnsupportedGeometry(other.to_owned())),
        }
    }
}

fn convert_rings(rings: Vec<Vec<Vec<f64>>>) -> Result<Vec<Ring>, GeoJsonError> {
    rings
        .into_iter()
        .map(|ring| ring.into_iter().map(|pos| position_to_lat_lng(&pos)).collect())
        .collect()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// GeoJSON positions are `[lng, lat, (alt)]`.
fn position_to_lat_lng(pos: &[f64]) -> Result<LatLng, GeoJsonError> {
    match pos {
        [lng, lat, ..] => Ok(LatLng::new(*lat, *lng)),
        _ => Err(GeoJsonError::ShortPosition(pos.len())),
    }
}
