//! # client
//!
//! Leptos + WASM frontend for the parking lot map.
//!
//! The interesting part of this crate is not the UI but the coordination core
//! underneath it: one observable view state (which city is selected, and
//! whether the map should jump to it) fanned out to every surface that cares,
//! plus a loader that fetches each city's parking lot geometry once, on
//! demand, no matter how many surfaces ask for it at the same time.
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | `config`      | Per-site settings (`primary` vs `ct`) read from the page       |
//! | `model`       | Typed city statistics and the validated `CityEntries` table    |
//! | `state`       | `Observable`, `ViewState`, the shared map handle, reconcilers |
//! | `net`         | Dataset fetches and the lazy `ParkingLotLoader`                |
//! | `util`        | URL codec, dropdown choices, scorecard formatting             |
//! | `bootstrap`   | The startup sequence wiring everything together               |
//! | `components`  | Leptos views for the map, dropdown, scorecard, share, about   |
//! | `pages`       | The map page: startup orchestration around the components     |
//! | `app`         | Root component: fetch the dataset, then mount the page        |
//!
//! Everything except `components`, `pages` and `app` runs natively, so the
//! coordination logic is tested with plain `cargo test`.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures;
pub mod model;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Install browser logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logging unavailable: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}

/// Outside the browser there is nothing to mount.
#[cfg(not(feature = "csr"))]
pub fn start() {
    log::debug!("client::start is a no-op without the csr feature");
}
