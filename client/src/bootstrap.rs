//! Startup: build every shared handle and wire the subscribers.
//!
//! DESIGN
//! ======
//! There are no globals. `bootstrap` constructs the map, the loader, and the
//! view state, hands each subscriber the handles it needs, and returns them
//! all in a [`MapPage`] for the views to hold on to.
//!
//! Subscribers are registered in a fixed order, because notification order
//! is registration order and the map-driven reconcilers write back into the
//! view state from inside a notification pass:
//!
//! 1. dropdown sync
//! 2. scorecard
//! 3. share link
//! 4. snap map to city
//! 5. parking lot loader
//! 6. boundary click, viewport settle (map listeners)
//!
//! Then `initialize()` runs the single seeding pass and the viewport size is
//! re-measured, since layout may have changed while the data loaded.
//!
//! ERROR HANDLING
//! ==============
//! Everything that can be wrong with the dataset is found here, before any
//! subscriber runs. The caller shows the [`StartupError`] instead of a map.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::rc::Rc;

use futures::task::LocalSpawn;
use mapview::geo::FeatureCollection;
use mapview::layers::LayerKind;

use crate::config::{ConfigError, SiteConfig};
use crate::model::{CityEntries, DataError, parse_city_stats};
use crate::net::LoadError;
use crate::net::api::DatasetText;
use crate::net::parking_lots::{DetailSource, ParkingLotLoader};
use crate::state::map::MapHandle;
use crate::state::map_position::{set_city_by_map_position, set_city_on_boundary_click, subscribe_snap_to_city};
use crate::state::view_state::{ViewStateObservable, init_view_state};
use crate::util::city_id::{determine_share_url, extract_city_id_from_url};
use crate::util::dropdown::{DropdownGroup, create_groups};
use crate::util::scorecard::{ScorecardValues, format_scorecard};

/// Anything that keeps the page from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("site configuration is invalid: {0}")]
    Config(#[from] ConfigError),
    #[error("could not load the map data: {0}")]
    Load(#[from] LoadError),
    #[error("the map data is inconsistent: {0}")]
    Data(#[from] DataError),
}

/// The validated dataset.
#[derive(Debug)]
pub struct Dataset {
    pub entries: Rc<CityEntries>,
    pub boundaries: FeatureCollection,
}

impl Dataset {
    /// Parse and cross-check the two startup files.
    ///
    /// # Errors
    ///
    /// Any [`DataError`] found while parsing or matching stats to boundaries.
    pub fn parse(text: &DatasetText) -> Result<Self, DataError> {
        let stats = parse_city_stats(&text.stats)?;
        let boundaries = FeatureCollection::from_json(&text.boundaries)?;
        let entries = CityEntries::build(stats, &boundaries)?;
        log::debug!("dataset: {} cities", entries.len());
        Ok(Self { entries: Rc::new(entries), boundaries })
    }
}

/// Render functions for the non-map surfaces, one per subscriber.
pub struct Surfaces {
    /// Select a city id in the dropdown.
    pub set_dropdown: Box<dyn Fn(&str)>,
    pub render_scorecard: Box<dyn Fn(&ScorecardValues)>,
    /// Point the share and full-screen links at a new URL.
    pub set_share_url: Box<dyn Fn(&str)>,
}

/// Handles produced by [`bootstrap`].
pub struct MapPage {
    pub config: Rc<SiteConfig>,
    pub entries: Rc<CityEntries>,
    pub dropdown_groups: Vec<DropdownGroup>,
    pub map: MapHandle,
    pub view_state: ViewStateObservable,
    pub loader: ParkingLotLoader,
}

/// Build and wire the page.
///
/// `measure` reports the map container's size in CSS pixels; it is called
/// once up front and again after the seeding pass.
///
/// # Errors
///
/// [`StartupError::Data`] when the dropdown cannot be grouped (an entry names
/// an unknown county).
pub fn bootstrap(
    config: Rc<SiteConfig>,
    dataset: Dataset,
    current_url: &str,
    measure: impl Fn() -> (f64, f64),
    source: Rc<dyn DetailSource>,
    spawner: Rc<dyn LocalSpawn>,
    surfaces: Surfaces,
) -> Result<MapPage, StartupError> {
    let Dataset { entries, boundaries } = dataset;
    let dropdown_groups = create_groups(config.variant, &entries)?;

    let (width, height) = measure();
    let map = MapHandle::new(width, height);
    map.add_layer(LayerKind::Boundaries, boundaries);

    let loader = ParkingLotLoader::new(map.clone(), source, spawner);

    let initial_city = extract_city_id_from_url(current_url);
    let view_state = init_view_state(entries.ids(), initial_city.as_deref(), &config.fallback_city);

    let Surfaces { set_dropdown, render_scorecard, set_share_url } = surfaces;
    view_state.subscribe("dropdown sync", move |state| set_dropdown(&state.city_id));

    let scorecard_entries = Rc::clone(&entries);
    let variant = config.variant;
    view_state.subscribe("scorecard", move |state| match scorecard_entries.get(&state.city_id) {
        Some(entry) => render_scorecard(&format_scorecard(variant, &entry.stats)),
        None => log::warn!("scorecard: unknown city {}", state.city_id),
    });

    let base_url = current_url.to_owned();
    view_state.subscribe("share link", move |state| set_share_url(&determine_share_url(&base_url, &state.city_id)));

    subscribe_snap_to_city(&view_state, &map, &entries, config.snap_offset_px);
    loader.subscribe(&view_state);
    set_city_on_boundary_click(&view_state, &map, &entries, config.min_click_zoom);
    set_city_by_map_position(&view_state, &map, &entries, &loader);

    view_state.initialize();

    let (width, height) = measure();
    map.invalidate_size(width, height);

    Ok(MapPage { config, entries, dropdown_groups, map, view_state, loader })
}
