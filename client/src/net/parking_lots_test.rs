use std::rc::Rc;

use futures::FutureExt;
use futures::executor::LocalPool;
use mapview::geo::FeatureCollection;
use mapview::layers::LayerKind;

use super::*;
use crate::fixtures::PendingSource;
use crate::state::view_state::init_view_state;

struct Harness {
    pool: LocalPool,
    source: Rc<PendingSource>,
    map: MapHandle,
    loader: ParkingLotLoader,
}

fn harness() -> Harness {
    let pool = LocalPool::new();
    let source = Rc::new(PendingSource::default());
    let map = MapHandle::new(800.0, 600.0);
    map.add_layer(LayerKind::Boundaries, FeatureCollection::default());
    let loader = ParkingLotLoader::new(map.clone(), source.clone(), Rc::new(pool.spawner()));
    Harness { pool, source, map, loader }
}

fn failure() -> LoadError {
    LoadError::Status { url: "/data/parking-lots/boston-ma.geojson".to_owned(), status: 404 }
}

// =============================================================
// De-duplication
// =============================================================

#[test]
fn concurrent_loads_share_one_fetch() {
    let mut h = harness();
    let first = h.loader.load("boston-ma");
    let second = h.loader.load("boston-ma");
    assert_eq!(h.source.call_count(), 1);
    assert!(h.loader.is_in_flight("boston-ma"));

    h.pool.run_until_stalled();
    assert!(first.peek().is_none());
    assert!(second.peek().is_none());

    h.source.resolve("boston-ma", Ok(FeatureCollection::default()));
    h.pool.run_until_stalled();
    assert_eq!(first.peek(), Some(&Ok(())));
    assert_eq!(second.peek(), Some(&Ok(())));
    assert!(h.loader.is_loaded("boston-ma"));
    assert!(!h.loader.is_in_flight("boston-ma"));
}

#[test]
fn different_cities_fetch_independently() {
    let h = harness();
    drop(h.loader.load("boston-ma"));
    drop(h.loader.load("columbus-oh"));
    assert_eq!(h.source.calls(), vec!["boston-ma".to_owned(), "columbus-oh".to_owned()]);
}

// =============================================================
// Loaded cities
// =============================================================

#[test]
fn loaded_city_resolves_immediately_without_fetch() {
    let mut h = harness();
    drop(h.loader.load("boston-ma"));
    h.source.resolve("boston-ma", Ok(FeatureCollection::default()));
    h.pool.run_until_stalled();

    let again = h.loader.load("boston-ma");
    assert_eq!(again.now_or_never(), Some(Ok(())));
    assert_eq!(h.source.call_count(), 1);
    assert_eq!(h.map.layer_count(LayerKind::Detail), 1);
}

#[test]
fn success_puts_detail_under_boundaries() {
    let mut h = harness();
    drop(h.loader.load("boston-ma"));
    h.source.resolve("boston-ma", Ok(FeatureCollection::default()));
    h.pool.run_until_stalled();
    drop(h.loader.load("columbus-oh"));
    h.source.resolve("columbus-oh", Ok(FeatureCollection::default()));
    h.pool.run_until_stalled();

    let kinds = h.map.with_core(|core| core.layers.iter().map(|layer| layer.kind).collect::<Vec<_>>());
    assert_eq!(kinds, vec![LayerKind::Detail, LayerKind::Detail, LayerKind::Boundaries]);
}

#[test]
fn dropped_handle_still_loads() {
    let mut h = harness();
    drop(h.loader.load("boston-ma"));
    h.pool.run_until_stalled();
    h.source.resolve("boston-ma", Ok(FeatureCollection::default()));
    h.pool.run_until_stalled();
    assert!(h.loader.is_loaded("boston-ma"));
}

// =============================================================
// Failures
// =============================================================

#[test]
fn failure_reaches_every_waiter_and_is_retried() {
    let mut h = harness();
    let first = h.loader.load("boston-ma");
    let second = h.loader.load("boston-ma");
    h.source.resolve("boston-ma", Err(failure()));
    h.pool.run_until_stalled();

    assert_eq!(first.peek(), Some(&Err(failure())));
    assert_eq!(second.peek(), Some(&Err(failure())));
    assert!(!h.loader.is_loaded("boston-ma"));
    assert!(!h.loader.is_in_flight("boston-ma"));
    assert_eq!(h.map.layer_count(LayerKind::Detail), 0);

    let retry = h.loader.load("boston-ma");
    assert_eq!(h.source.call_count(), 2);
    h.source.resolve("boston-ma", Ok(FeatureCollection::default()));
    h.pool.run_until_stalled();
    assert_eq!(retry.peek(), Some(&Ok(())));
}

// =============================================================
// View-state subscription
// =============================================================

#[test]
fn subscribe_loads_each_selected_city() {
    let mut h = harness();
    let view_state = init_view_state(["boston-ma", "columbus-oh"], Some("boston-ma"), "columbus-oh");
    h.loader.subscribe(&view_state);
    view_state.initialize();
    assert_eq!(h.source.calls(), vec!["boston-ma".to_owned()]);

    view_state.set_value(crate::state::view_state::ViewState::new("columbus-oh", false));
    view_state.set_value(crate::state::view_state::ViewState::new("boston-ma", false));
    assert_eq!(h.source.call_count(), 2);

    h.source.resolve("boston-ma", Ok(FeatureCollection::default()));
    h.source.resolve("columbus-oh", Ok(FeatureCollection::default()));
    h.pool.run_until_stalled();
    assert!(h.loader.is_loaded("boston-ma"));
    assert!(h.loader.is_loaded("columbus-oh"));
}
