use std::rc::Rc;

use futures::executor::LocalPool;
use mapview::input::Button;
use mapview::layers::LayerKind;

use super::*;
use crate::fixtures::{PendingSource, bounds, columbus, entries_with, primary_boundaries, primary_entries};
use crate::state::view_state::init_view_state;

fn map() -> MapHandle {
    MapHandle::new(800.0, 600.0)
}

// =============================================================
// snap_to_city
// =============================================================

#[test]
fn snap_fits_then_shifts_city_down() {
    let map = map();
    snap_to_city(&map, &columbus(), -40.0);
    let point = map.lat_lng_to_container_point(columbus().center());
    assert!((point.x - 400.0).abs() < 1.0, "x = {}", point.x);
    assert!((point.y - 340.0).abs() < 1.0, "y = {}", point.y);
    assert!(map.bounds().contains(columbus().north_east));
    assert!(map.bounds().contains(columbus().south_west));
}

#[test]
fn snap_subscriber_follows_snapping_states_only() {
    let map = map();
    let entries = Rc::new(primary_entries());
    let view_state = init_view_state(entries.ids(), Some("columbus-oh"), "atlanta-ga");
    subscribe_snap_to_city(&view_state, &map, &entries, -40.0);
    view_state.initialize();
    assert!(map.bounds().contains(columbus().center()));

    let before = map.center();
    view_state.set_value(ViewState::new("atlanta-ga", false));
    assert_eq!(map.center(), before);

    view_state.set_value(ViewState::new("atlanta-ga", true));
    assert!(map.bounds().contains(crate::fixtures::atlanta().center()));
}

// =============================================================
// cities_in_view
// =============================================================

#[test]
fn nearest_city_wins() {
    let view = bounds(-1.0, -1.0, 1.0, 1.0);
    let entries = entries_with(&[("far", bounds(-0.1, 0.4, 0.1, 0.6)), ("near", bounds(-0.1, 0.2, 0.1, 0.4))]);
    let (visible, nearest) = cities_in_view(&view, &entries);
    assert_eq!(visible, vec!["far".to_owned(), "near".to_owned()]);
    assert_eq!(nearest.as_deref(), Some("near"));
}

#[test]
fn distance_three_beats_five_regardless_of_order() {
    let view = bounds(-10.0, -10.0, 10.0, 10.0);
    let five = bounds(-0.5, 4.5, 0.5, 5.5);
    let three = bounds(-0.5, 2.5, 0.5, 3.5);
    let (_, a) = cities_in_view(&view, &entries_with(&[("five", five), ("three", three)]));
    let (_, b) = cities_in_view(&view, &entries_with(&[("three", three), ("five", five)]));
    assert_eq!(a.as_deref(), Some("three"));
    assert_eq!(b.as_deref(), Some("three"));
}

#[test]
fn ties_go_to_first_city() {
    let view = bounds(-1.0, -1.0, 1.0, 1.0);
    let same = bounds(0.2, 0.2, 0.4, 0.4);
    let (_, nearest) = cities_in_view(&view, &entries_with(&[("first", same), ("second", same)]));
    assert_eq!(nearest.as_deref(), Some("first"));
}

#[test]
fn city_at_exact_center_is_chosen() {
    let view = bounds(-1.0, -1.0, 1.0, 1.0);
    let entries = entries_with(&[("off", bounds(0.5, 0.5, 0.7, 0.7)), ("centered", bounds(-0.2, -0.2, 0.2, 0.2))]);
    assert_eq!(cities_in_view(&view, &entries).1.as_deref(), Some("centered"));
}

#[test]
fn nothing_in_view() {
    let view = bounds(-1.0, -1.0, 1.0, 1.0);
    let (visible, nearest) = cities_in_view(&view, &entries_with(&[("away", bounds(10.0, 10.0, 11.0, 11.0))]));
    assert!(visible.is_empty());
    assert!(nearest.is_none());
}

// =============================================================
// set_city_by_map_position
// =============================================================

struct Reconciler {
    pool: LocalPool,
    source: Rc<PendingSource>,
    map: MapHandle,
    view_state: ViewStateObservable,
    loader: ParkingLotLoader,
}

fn reconciler() -> Reconciler {
    let pool = LocalPool::new();
    let source = Rc::new(PendingSource::default());
    let map = map();
    let entries = Rc::new(primary_entries());
    let loader = ParkingLotLoader::new(map.clone(), source.clone(), Rc::new(pool.spawner()));
    let view_state = init_view_state(entries.ids(), None, "atlanta-ga");
    set_city_by_map_position(&view_state, &map, &entries, &loader);
    view_state.initialize();
    Reconciler { pool, source, map, view_state, loader }
}

#[test]
fn panning_onto_city_selects_it_without_snapping() {
    let r = reconciler();
    r.map.set_view(columbus().center(), 11.0);
    assert_eq!(r.view_state.get_value(), ViewState::new("columbus-oh", false));
    assert_eq!(r.source.calls(), vec!["columbus-oh".to_owned()]);
}

#[test]
fn every_visible_city_is_loaded() {
    let mut r = reconciler();
    r.map.set_view(LatLng::new(38.0, -90.0), 3.0);
    assert_eq!(r.source.call_count(), 4);
    for id in ["atlanta-ga", "columbus-oh", "fort-worth-tx", "boston-ma"] {
        r.source.resolve(id, Ok(mapview::geo::FeatureCollection::default()));
    }
    r.pool.run_until_stalled();
    assert!(r.loader.is_loaded("boston-ma"));
    assert_eq!(r.map.layer_count(LayerKind::Detail), 4);
}

#[test]
fn empty_viewport_keeps_selection() {
    let r = reconciler();
    r.map.set_view(LatLng::new(-30.0, 20.0), 10.0);
    assert_eq!(r.view_state.get_value(), ViewState::new("atlanta-ga", true));
    assert_eq!(r.source.call_count(), 0);
}

// =============================================================
// set_city_on_boundary_click
// =============================================================

fn click_center(map: &MapHandle) {
    let center = Point::new(400.0, 300.0);
    map.update(|core| core.on_pointer_down(center, Button::Primary));
    map.update(|core| core.on_pointer_up(center, Button::Primary));
}

fn clickable() -> (MapHandle, ViewStateObservable) {
    let map = map();
    map.add_layer(LayerKind::Boundaries, primary_boundaries());
    let entries = Rc::new(primary_entries());
    let view_state = init_view_state(entries.ids(), None, "atlanta-ga");
    set_city_on_boundary_click(&view_state, &map, &entries, 7.0);
    view_state.initialize();
    (map, view_state)
}

#[test]
fn click_when_zoomed_in_selects_and_snaps() {
    let (map, view_state) = clickable();
    map.set_view(columbus().center(), 10.0);
    click_center(&map);
    assert_eq!(view_state.get_value(), ViewState::new("columbus-oh", true));
}

#[test]
fn click_at_zoom_seven_or_less_is_ignored() {
    let (map, view_state) = clickable();
    map.set_view(columbus().center(), 7.0);
    click_center(&map);
    assert_eq!(view_state.get_value().city_id, "atlanta-ga");
}
