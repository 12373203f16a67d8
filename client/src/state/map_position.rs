//! Keeping the map viewport and the selected city in step.
//!
//! Two directions, both subscribers:
//!
//! - State to map: when the view state asks for a snap, fit the viewport to
//!   the city's boundary and nudge it so the city is not hidden under the
//!   header controls.
//! - Map to state: after the viewport settles, load parking lots for every
//!   city in view and select the one nearest the center. These writes never
//!   snap, so the user's pan is left alone.
//!
//! A click on a boundary selects that city and snaps to it, but only once
//! the user has zoomed in far enough to be aiming at a particular city.

#[cfg(test)]
#[path = "map_position_test.rs"]
mod map_position_test;

use std::rc::Rc;

use mapview::camera::Point;
use mapview::geo::{LatLng, LatLngBounds};

use super::map::MapHandle;
use super::view_state::{ViewState, ViewStateObservable};
use crate::model::{CityEntries, CityId};
use crate::net::parking_lots::ParkingLotLoader;

/// Fit `bounds`, then shift the view by `offset_px` screen pixels vertically.
pub fn snap_to_city(map: &MapHandle, bounds: &LatLngBounds, offset_px: f64) {
    map.fit_bounds(bounds);
    let center = map.lat_lng_to_container_point(bounds.center());
    let shifted = map.container_point_to_lat_lng(center.add(Point::new(0.0, offset_px)));
    map.set_center(shifted);
}

/// Snap the map whenever the view state asks for it.
pub fn subscribe_snap_to_city(
    view_state: &ViewStateObservable,
    map: &MapHandle,
    city_entries: &Rc<CityEntries>,
    offset_px: f64,
) {
    let map = map.clone();
    let entries = Rc::clone(city_entries);
    view_state.subscribe("snap to city", move |state| {
        if !state.should_snap_map {
            return;
        }
        let Some(entry) = entries.get(&state.city_id) else {
            log::warn!("snap to city: unknown city {}", state.city_id);
            return;
        };
        snap_to_city(&map, &entry.bounds, offset_px);
    });
}

/// Cities whose bounds touch `view`, in dataset order, plus the one whose
/// bounds center is nearest the view's center.
///
/// Ties go to the earlier city.
#[must_use]
pub fn cities_in_view(view: &LatLngBounds, city_entries: &CityEntries) -> (Vec<CityId>, Option<CityId>) {
    let center = view.center();
    let mut visible = Vec::new();
    let mut nearest: Option<(f64, &str)> = None;
    for entry in city_entries.iter() {
        if !view.intersects(&entry.bounds) {
            continue;
        }
        visible.push(entry.id.clone());
        let distance = center.distance_to(entry.bounds.center());
        if nearest.is_none_or(|(best, _)| distance < best) {
            nearest = Some((distance, &entry.id));
        }
    }
    (visible, nearest.map(|(_, id)| id.to_owned()))
}

/// After every viewport change, load visible cities and select the central one.
///
/// With no city in view the selection is left as it was.
pub fn set_city_by_map_position(
    view_state: &ViewStateObservable,
    map: &MapHandle,
    city_entries: &Rc<CityEntries>,
    loader: &ParkingLotLoader,
) {
    let view_state = view_state.clone();
    let handle = map.clone();
    let entries = Rc::clone(city_entries);
    let loader = loader.clone();
    map.on_move_end(move || {
        let (visible, nearest) = cities_in_view(&handle.bounds(), &entries);
        for id in &visible {
            drop(loader.load(id));
        }
        if let Some(city_id) = nearest {
            view_state.set_value(ViewState::new(city_id, false));
        }
    });
}

/// Select a city when its boundary is clicked while zoomed past `min_zoom`.
pub fn set_city_on_boundary_click(
    view_state: &ViewStateObservable,
    map: &MapHandle,
    city_entries: &Rc<CityEntries>,
    min_zoom: f64,
) {
    let view_state = view_state.clone();
    let handle = map.clone();
    let entries = Rc::clone(city_entries);
    map.on_feature_click(move |city_id: &str, _at: LatLng| {
        if handle.zoom() <= min_zoom {
            return;
        }
        if !entries.contains(city_id) {
            log::warn!("boundary click: unknown city {city_id}");
            return;
        }
        view_state.set_value(ViewState::new(city_id, true));
    });
}
