//! "About" popup over the map.
//!
//! The body is Markdown so the copy can be edited without touching markup.
//! Raw HTML in the source is dropped before rendering.

#[cfg(test)]
#[path = "about_popup_test.rs"]
mod about_popup_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

const ABOUT_MARKDOWN: &str = "\
## About the map

Parking lots take up a striking share of many downtowns. This map outlines \
each city's central business district and shades every off-street surface \
lot and parking garage inside it.

- Pick a city from the dropdown, or pan the map and the nearest city is selected.
- Zoom in and click a city outline to jump to it.
- Use the share button to copy a link straight to the current city.

Parking data is drawn from satellite imagery and local records. \
[Read the methodology](https://parkingreform.org/resources/parking-lot-map-methodology/) \
or [contact us](mailto:info@parkingreform.org) with corrections.
";

/// Render Markdown to HTML, dropping any embedded HTML.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Popup shown while `open` is set. Clicking outside the content closes it.
#[component]
pub fn AboutPopup(open: RwSignal<bool>) -> impl IntoView {
    let body = render_markdown_html(ABOUT_MARKDOWN);
    let close = move |_| open.set(false);

    view! {
        <Show when=move || open.get()>
            <div class="about-backdrop" on:click=close>
                <div class="about-text-popup" role="dialog" on:click=move |ev| ev.stop_propagation()>
                    <button class="about-close" title="Close" on:click=close>
                        "✕"
                    </button>
                    <div class="about-text" inner_html=body.clone()></div>
                </div>
            </div>
        </Show>
    }
}
