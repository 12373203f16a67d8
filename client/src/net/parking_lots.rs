//! Lazy, de-duplicated loading of each city's parking lot geometry.
//!
//! DESIGN
//! ======
//! Parking lot files are large, so a city's geometry is fetched only when the
//! city is selected or scrolls into view. Each city moves through
//! `NotRequested -> InFlight -> Loaded`:
//!
//! - *Loaded* cities are answered with an already-resolved handle.
//! - *InFlight* cities hand back a clone of the one shared pending handle, so
//!   any number of concurrent callers cause exactly one fetch.
//! - Anything else starts a fetch, records its handle, and hands the handle
//!   to the executor so the fetch runs even if every caller drops theirs.
//!
//! On completion the in-flight entry is removed either way. Success marks the
//! city loaded, adds its features to the map, and pushes detail layers back
//! under the city outlines. Failure is logged and leaves the city
//! un-requested, so the next `load` tries again.
//!
//! The whole thing is single-threaded: state lives in `RefCell`s behind an
//! `Rc`, and futures are spawned on a `LocalSpawn` executor.

#[cfg(test)]
#[path = "parking_lots_test.rs"]
mod parking_lots_test;

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{self, LocalBoxFuture, Shared};
use futures::task::{LocalSpawn, LocalSpawnExt};
use mapview::geo::FeatureCollection;
use mapview::layers::LayerKind;

use super::LoadError;
use crate::model::CityId;
use crate::state::map::MapHandle;
use crate::state::view_state::ViewStateObservable;

/// Where parking lot geometry comes from.
pub trait DetailSource {
    /// Fetch and decode one city's parking lots.
    fn fetch(&self, city_id: &str) -> LocalBoxFuture<'static, Result<FeatureCollection, LoadError>>;
}

/// Pending or settled result of one city's load, shared by all callers.
pub type LoadHandle = Shared<LocalBoxFuture<'static, Result<(), LoadError>>>;

struct Inner {
    map: MapHandle,
    source: Rc<dyn DetailSource>,
    spawner: Rc<dyn LocalSpawn>,
    loaded: RefCell<HashSet<CityId>>,
    in_flight: RefCell<HashMap<CityId, LoadHandle>>,
}

/// Loads parking lots into the map's detail layer, once per city.
#[derive(Clone)]
pub struct ParkingLotLoader {
    inner: Rc<Inner>,
}

impl ParkingLotLoader {
    pub fn new(map: MapHandle, source: Rc<dyn DetailSource>, spawner: Rc<dyn LocalSpawn>) -> Self {
        Self {
            inner: Rc::new(Inner {
                map,
                source,
                spawner,
                loaded: RefCell::new(HashSet::new()),
                in_flight: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Make sure `city_id`'s parking lots are on the map.
    ///
    /// The returned handle settles when they are. Dropping it does not cancel
    /// the load.
    pub fn load(&self, city_id: &str) -> LoadHandle {
        if self.is_loaded(city_id) {
            return future::ready(Ok(())).boxed_local().shared();
        }
        if let Some(pending) = self.inner.in_flight.borrow().get(city_id) {
            return pending.clone();
        }

        let id = city_id.to_owned();
        let fetch = self.inner.source.fetch(city_id);
        let inner = Rc::clone(&self.inner);
        let handle = async move {
            let result = fetch.await;
            inner.finish(&id, result)
        }
        .boxed_local()
        .shared();

        self.inner.in_flight.borrow_mut().insert(city_id.to_owned(), handle.clone());
        if let Err(err) = self.inner.spawner.spawn_local(handle.clone().map(drop)) {
            log::warn!("parking lots: could not schedule load of {city_id}: {err}");
        }
        handle
    }

    /// Load the newly selected city on every view-state change.
    pub fn subscribe(&self, view_state: &ViewStateObservable) {
        let loader = self.clone();
        view_state.subscribe("load parking lots", move |state| {
            drop(loader.load(&state.city_id));
        });
    }

    #[must_use]
    pub fn is_loaded(&self, city_id: &str) -> bool {
        self.inner.loaded.borrow().contains(city_id)
    }

    #[must_use]
    pub fn is_in_flight(&self, city_id: &str) -> bool {
        self.inner.in_flight.borrow().contains_key(city_id)
    }
}

impl Inner {
    fn finish(&self, city_id: &str, result: Result<FeatureCollection, LoadError>) -> Result<(), LoadError> {
        self.in_flight.borrow_mut().remove(city_id);
        match result {
            Ok(lots) => {
                self.loaded.borrow_mut().insert(city_id.to_owned());
                self.map.add_layer(LayerKind::Detail, lots);
                self.map.send_to_back(LayerKind::Detail);
                log::debug!("parking lots: loaded {city_id}");
                Ok(())
            }
            Err(err) => {
                log::warn!("parking lots: failed to load {city_id}: {err}");
                Err(err)
            }
        }
    }
}
