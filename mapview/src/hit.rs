#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geo::{Feature, LatLng, Ring};
use crate::layers::{LayerKind, LayerStack};

/// Property that tags a boundary feature with its identifier.
pub const FEATURE_ID_PROPERTY: &str = "id";

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub feature_id: String,
}

/// Even-odd ray cast of `point` against one ring.
#[must_use]
pub fn ring_contains(ring: &Ring, point: LatLng) -> bool {
    let mut inside = false;
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let a = ring[i];
        let b = ring[j];
        if (a.lat > point.lat) != (b.lat > point.lat) {
            let cross_lng = (b.lng - a.lng) * (point.lat - a.lat) / (b.lat - a.lat) + a.lng;
            if point.lng < cross_lng {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether `point` is inside any polygon of `feature`, honoring holes.
#[must_use]
pub fn feature_contains(feature: &Feature, point: LatLng) -> bool {
    if feature.bounds().is_none_or(|bounds| !bounds.contains(point)) {
        return false;
    }
    feature.geometry.polygons().into_iter().any(|rings| match rings.split_first() {
        Some((outer, holes)) => ring_contains(outer, point) && !holes.iter().any(|hole| ring_contains(hole, point)),
        None => false,
    })
}

/// Find the topmost boundary feature under `point`.
///
/// Layers and features are checked from the top of the stack down, so the
/// last-drawn shape wins, matching what the user sees.
#[must_use]
pub fn hit_test(point: LatLng, layers: &LayerStack) -> Option<Hit> {
    let boundaries = layers.iter_kind(LayerKind::Boundaries).collect::<Vec<_>>();
    boundaries.into_iter().rev().find_map(|layer| {
        layer
            .data
            .features
            .iter()
            .rev()
            .filter(|feature| feature_contains(feature, point))
            .find_map(|feature| feature.property_str(FEATURE_ID_PROPERTY))
            .map(|id| Hit { feature_id: id.to_owned() })
    })
}
