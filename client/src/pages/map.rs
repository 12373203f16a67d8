//! The map page: header controls, scorecard, and the map canvas.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once the dataset text has arrived. The page validates it, waits
//! for the canvas to mount (the map's first viewport size comes from it),
//! then runs `bootstrap` and keeps the returned handles for the lifetime of
//! the page.
//!
//! The view-state subscribers write plain signals (`selected`, `scorecard`,
//! `share_url`) that the components render. A dropdown pick arrives as
//! `picked` and is turned into a snapping view-state update here.

use std::rc::Rc;

use leptos::prelude::*;

use crate::bootstrap::{Dataset, StartupError};
use crate::components::about_popup::AboutPopup;
use crate::components::city_dropdown::CityDropdown;
use crate::components::lots_toggle::LotsToggle;
use crate::components::map_host::{MapHost, MapSlot};
use crate::components::scorecard::Scorecard;
use crate::components::share_link::ShareLink;
use crate::config::SiteConfig;
use crate::net::api::DatasetText;
use crate::util::city_id::{current_url, has_lots_toggle};
use crate::util::dropdown::DropdownGroup;
use crate::util::scorecard::ScorecardValues;

#[cfg(feature = "csr")]
use std::cell::RefCell;

#[cfg(feature = "csr")]
use crate::bootstrap::{Surfaces, bootstrap};
#[cfg(feature = "csr")]
use crate::components::map_host::{attach_renderer, measure, watch_resize};
#[cfg(feature = "csr")]
use crate::net::api::HttpDetailSource;
#[cfg(feature = "csr")]
use crate::state::view_state::{ViewState, ViewStateObservable};

/// Executor for the loader: futures run on the browser's microtask queue.
#[cfg(feature = "csr")]
struct BrowserSpawner;

#[cfg(feature = "csr")]
impl futures::task::LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(
        &self,
        future: futures::task::LocalFutureObj<'static, ()>,
    ) -> Result<(), futures::task::SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}

/// Plain error text in place of the map.
pub fn startup_error_view(message: String) -> AnyView {
    view! { <p class="startup-error">{message}</p> }.into_any()
}

#[component]
pub fn MapPageView(config: SiteConfig, text: DatasetText) -> impl IntoView {
    let dataset = match Dataset::parse(&text) {
        Ok(dataset) => dataset,
        Err(err) => {
            let err = StartupError::from(err);
            log::error!("startup: {err}");
            return startup_error_view(err.to_string());
        }
    };

    let groups = RwSignal::new(Vec::<DropdownGroup>::new());
    let selected = RwSignal::new(String::new());
    let scorecard = RwSignal::new(None::<ScorecardValues>);
    let share_url = RwSignal::new(String::new());
    let picked = RwSignal::new(None::<String>);
    let about_open = RwSignal::new(false);
    let startup_error = RwSignal::new(None::<String>);
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let map_slot: MapSlot = Rc::default();
    let reset_ms = config.share_reset_ms;
    let lots_toggle = has_lots_toggle(&current_url()).then(|| view! { <LotsToggle map=Rc::clone(&map_slot)/> });

    #[cfg(feature = "csr")]
    {
        let view_state_slot: Rc<RefCell<Option<ViewStateObservable>>> = Rc::default();

        {
            let pending = RefCell::new(Some(dataset));
            let config = Rc::new(config);
            let map_slot = Rc::clone(&map_slot);
            let view_state_slot = Rc::clone(&view_state_slot);
            Effect::new(move || {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                let Some(dataset) = pending.borrow_mut().take() else {
                    return;
                };
                let surfaces = Surfaces {
                    set_dropdown: Box::new(move |city_id: &str| selected.set(city_id.to_owned())),
                    render_scorecard: Box::new(move |values: &ScorecardValues| scorecard.set(Some(values.clone()))),
                    set_share_url: Box::new(move |url: &str| share_url.set(url.to_owned())),
                };
                let source = Rc::new(HttpDetailSource::new(Rc::clone(&config)));
                match bootstrap(
                    Rc::clone(&config),
                    dataset,
                    &current_url(),
                    || measure(&canvas_ref),
                    source,
                    Rc::new(BrowserSpawner),
                    surfaces,
                ) {
                    Ok(page) => {
                        groups.set(page.dropdown_groups);
                        attach_renderer(&page.map, canvas);
                        watch_resize(&page.map, canvas_ref);
                        *map_slot.borrow_mut() = Some(page.map);
                        *view_state_slot.borrow_mut() = Some(page.view_state);
                    }
                    Err(err) => {
                        log::error!("startup: {err}");
                        startup_error.set(Some(err.to_string()));
                    }
                }
            });
        }

        Effect::new(move || {
            let Some(city_id) = picked.get() else {
                return;
            };
            let view_state = view_state_slot.borrow().clone();
            if let Some(view_state) = view_state {
                view_state.set_value(ViewState::new(city_id, true));
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        drop((dataset, config));
    }

    let toggle_about = move |_| about_open.update(|open| *open = !*open);

    view! {
        <header class="header">
            <button
                class="header-about-icon"
                class:active=move || about_open.get()
                title="About this map"
                on:click=toggle_about
            >
                <i class="fa-solid fa-circle-info"></i>
            </button>
            <CityDropdown groups selected picked/>
            <ShareLink share_url reset_ms/>
        </header>
        <Scorecard values=scorecard/>
        {lots_toggle}
        <MapHost canvas_ref map=map_slot/>
        {move || startup_error.get().map(startup_error_view)}
        <AboutPopup open=about_open/>
    }
    .into_any()
}
