//! City picker.
//!
//! The dropdown never touches the view state itself: a pick is written to
//! `picked` and the page turns it into a snapping selection. The displayed
//! value follows `selected`, which the dropdown-sync subscriber keeps current.
//!
//! Next to the `<select>` sits a search box that lists up to
//! [`SEARCH_RESULT_LIMIT`] cities matching on city or state/context.

use leptos::prelude::*;

use crate::util::dropdown::{DropdownGroup, SEARCH_RESULT_LIMIT, search_choices};

/// Search box with its result list.
#[component]
fn CitySearch(groups: RwSignal<Vec<DropdownGroup>>, picked: RwSignal<Option<String>>) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let results =
        Memo::new(move |_| groups.with(|groups| query.with(|q| search_choices(groups, q, SEARCH_RESULT_LIMIT))));
    let pick = move |value: String| {
        query.set(String::new());
        picked.set(Some(value));
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        if let Some(first) = results.with_untracked(|results| results.first().map(|c| c.value.clone())) {
            pick(first);
        }
    };

    view! {
        <div class="city-search">
            <input
                type="search"
                placeholder="Search for a city"
                aria-label="Search for a city"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <Show when=move || results.with(|results| !results.is_empty())>
                <ul class="city-search__results">
                    {move || {
                        results
                            .get()
                            .into_iter()
                            .map(|choice| {
                                let value = choice.value;
                                view! {
                                    <li>
                                        <button on:click=move |_| pick(value.clone())>{choice.label}</button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

/// `<select>` of every city, grouped, plus the search box.
#[component]
pub fn CityDropdown(
    groups: RwSignal<Vec<DropdownGroup>>,
    selected: RwSignal<String>,
    picked: RwSignal<Option<String>>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if !value.is_empty() {
            picked.set(Some(value));
        }
    };

    view! {
        <CitySearch groups picked/>
        <select class="city-dropdown" aria-label="Select a city" on:change=on_change prop:value=move || selected.get()>
            {move || {
                groups
                    .get()
                    .into_iter()
                    .map(|group| {
                        view! {
                            <optgroup label=group.label>
                                {group
                                    .choices
                                    .into_iter()
                                    .map(|choice| {
                                        let is_selected = choice.value == selected.get_untracked();
                                        view! {
                                            <option value=choice.value selected=is_selected>
                                                {choice.label}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </optgroup>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
