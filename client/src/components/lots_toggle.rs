//! On/off buttons for the parking lot layers.
//!
//! Only shown when the page URL carries `#lots-toggle`. Hiding keeps the
//! loaded layers on the map, so turning them back on needs no refetch.

use std::rc::Rc;

use leptos::prelude::*;
use mapview::layers::LayerKind;

use super::map_host::MapSlot;

#[component]
pub fn LotsToggle(map: MapSlot) -> impl IntoView {
    let visible = RwSignal::new(true);
    let show = move |slot: &MapSlot, on: bool| {
        let Some(map) = slot.borrow().clone() else {
            return;
        };
        map.set_layer_visible(LayerKind::Detail, on);
        visible.set(on);
        log::debug!("map: parking lots {}", if on { "shown" } else { "hidden" });
    };
    let slot_on = Rc::clone(&map);
    let slot_off = map;

    view! {
        <div id="lots-toggle" class="lots-toggle">
            <button
                id="lots-toggle-off"
                class:active=move || !visible.get()
                on:click=move |_| show(&slot_off, false)
            >
                "Hide parking lots"
            </button>
            <button
                id="lots-toggle-on"
                class:active=move || visible.get()
                on:click=move |_| show(&slot_on, true)
            >
                "Show parking lots"
            </button>
        </div>
    }
}
