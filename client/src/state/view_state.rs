//! The selected city, shared by every surface on the page.

#[cfg(test)]
#[path = "view_state_test.rs"]
mod view_state_test;

use super::observable::Observable;
use crate::model::CityId;

/// Which city is selected, and whether the map should jump to it.
///
/// `should_snap_map` is an instruction for the map-snap subscriber only.
/// Changes that come *from* the map (panning onto another city) set it to
/// `false` so the viewport is not yanked back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub city_id: CityId,
    pub should_snap_map: bool,
}

impl ViewState {
    #[must_use]
    pub fn new(city_id: impl Into<CityId>, should_snap_map: bool) -> Self {
        Self { city_id: city_id.into(), should_snap_map }
    }
}

pub type ViewStateObservable = Observable<ViewState>;

/// Build the view state, not yet initialized.
///
/// Starts on `initial_city_id` when it names a known city, otherwise on
/// `fallback_city_id`, which is trusted as-is. The map always snaps to the
/// starting city.
pub fn init_view_state<'a>(
    city_ids: impl IntoIterator<Item = &'a str>,
    initial_city_id: Option<&str>,
    fallback_city_id: &str,
) -> ViewStateObservable {
    let city_id = initial_city_id
        .filter(|wanted| city_ids.into_iter().any(|id| id == *wanted))
        .unwrap_or(fallback_city_id);
    Observable::new("view state", ViewState::new(city_id, true))
}
