//! Scorecard for the selected city.
//!
//! Header always visible; the detail lines sit in an "Additional details"
//! accordion that starts collapsed and keeps its state across cities.

use leptos::prelude::*;

use crate::util::scorecard::{REFORM_DETAILS_LABEL, ScorecardEntry, ScorecardValues};

fn entry_view(entry: ScorecardEntry) -> AnyView {
    let text = entry.text();
    let details = entry.details_url().map(str::to_owned);
    match entry {
        ScorecardEntry::Text(_) | ScorecardEntry::Reform { .. } => view! {
            <li>
                {text}
                {details
                    .map(|url| {
                        view! {
                            " ("
                            <a
                                class="external"
                                title="view parking reform details"
                                href=url
                                target="_blank"
                                rel="noopener"
                            >
                                {REFORM_DETAILS_LABEL}
                                " "
                                <i aria-hidden="true" class="fa-solid fa-arrow-right"></i>
                            </a>
                            ")"
                        }
                    })}
            </li>
        }
        .into_any(),
        ScorecardEntry::Maintainer { email } => view! {
            <li>
                <a class="external" href=format!("mailto:{email}")>
                    {text}
                </a>
            </li>
        }
        .into_any(),
    }
}

#[component]
pub fn Scorecard(values: RwSignal<Option<ScorecardValues>>) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let toggle = move |_| expanded.update(|open| *open = !*open);

    view! {
        <section class="scorecard">
            {move || {
                values
                    .get()
                    .map(|values| {
                        view! {
                            <header class="scorecard__header">
                                <h1 class="scorecard__title">{values.title}</h1>
                                <p class="scorecard__summary">{values.summary}</p>
                                {values
                                    .community_warning
                                    .map(|warning| {
                                        view! {
                                            <p class="scorecard__warning">
                                                <i class="fa-solid fa-triangle-exclamation" aria-hidden="true"></i>
                                                " "
                                                {warning}
                                            </p>
                                        }
                                    })}
                            </header>
                            <button
                                class="scorecard__accordion-toggle"
                                class:scorecard__accordion-toggle--open=move || expanded.get()
                                aria-expanded=move || expanded.get().to_string()
                                on:click=toggle
                            >
                                "Additional details"
                            </button>
                            <ul class="scorecard__details" class:scorecard__details--hidden=move || !expanded.get()>
                                {values.entries.into_iter().map(entry_view).collect_view()}
                            </ul>
                        }
                    })
            }}
        </section>
    }
}
