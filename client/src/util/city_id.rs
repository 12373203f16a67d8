//! City ids in shareable URLs.
//!
//! A link to a city carries its id in the fragment: `...#city=columbus-oh`.
//! Links from the old embed used `#parking-reform-map=<id>`; those still work.

#[cfg(test)]
#[path = "city_id_test.rs"]
mod city_id_test;

use crate::model::CityId;

const CITY_MARKER: &str = "#city=";
const LEGACY_MARKER: &str = "#parking-reform-map=";
const LOTS_TOGGLE_MARKER: &str = "#lots-toggle";

/// Pull the city id out of a page URL.
///
/// The id is lower-cased and stripped of dots, so a hand-typed
/// `#city=St.-Louis` finds `st-louis`. Returns `None` when neither marker is
/// present or the value is empty.
#[must_use]
pub fn extract_city_id_from_url(url: &str) -> Option<CityId> {
    let start = [CITY_MARKER, LEGACY_MARKER]
        .iter()
        .filter_map(|marker| url.find(marker).map(|at| at + marker.len()))
        .min()?;
    let rest = &url[start..];
    let raw = rest.split(['=', '#', '&']).next().unwrap_or_default();
    let id = raw.to_lowercase().replace('.', "");
    if id.is_empty() { None } else { Some(id) }
}

/// Whether the URL asks for the parking lot on/off buttons.
///
/// The marker may follow a city fragment: `...#city=tempe-az#lots-toggle`.
/// Share links never carry it.
#[must_use]
pub fn has_lots_toggle(url: &str) -> bool {
    url.contains(LOTS_TOGGLE_MARKER)
}

/// URL that opens the page on `city_id`.
///
/// Any existing fragment is dropped, so calling this on its own output with
/// another id replaces the city rather than appending a second marker.
#[must_use]
pub fn determine_share_url(current_url: &str, city_id: &str) -> String {
    let base = current_url.split('#').next().unwrap_or_default();
    format!("{base}{CITY_MARKER}{city_id}")
}

/// Slugify a display name into a city id: `"St. Louis, MO"` becomes `st-louis-mo`.
///
/// Words are runs of letters and digits; a lower-to-upper case change also
/// starts a new word.
#[must_use]
pub fn parse_city_id_from_json(name: &str) -> CityId {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in name.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.extend(ch.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words.join("-")
}

/// The page's current URL, or an empty string outside the browser.
#[must_use]
pub fn current_url() -> String {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        match window.location().href() {
            Ok(href) => href,
            Err(err) => {
                log::warn!("could not read page url: {err:?}");
                String::new()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
