//! City dropdown choices, grouping, and search.
//!
//! Choices carry the full display name plus the two halves the search box
//! matches on: `"Tempe, AZ"` searches as city `Tempe` and context `AZ`,
//! `"Hartford - rail station"` as `Hartford` / `rail station`.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

use crate::config::SiteVariant;
use crate::model::{CityEntries, DataError};

/// Most matches the search box lists at once.
pub const SEARCH_RESULT_LIMIT: usize = 6;

/// Connecticut counties in the order the dropdown lists them.
pub const CT_COUNTIES: &[&str] = &[
    "Fairfield County",
    "Hartford County",
    "Litchfield County",
    "Middlesex County",
    "New Haven County",
    "New London County",
    "Tolland County",
    "Windham County",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownChoice {
    /// City id submitted when the choice is picked.
    pub value: String,
    /// Full display name.
    pub label: String,
    /// Search field: the part before the separator.
    pub city: String,
    /// Search field: the part after it, e.g. `NY` or `rail station`.
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownGroup {
    pub label: String,
    pub choices: Vec<DropdownChoice>,
}

/// Build one choice from a city id and display name.
#[must_use]
pub fn create_choice(id: &str, name: &str) -> DropdownChoice {
    let (city, context) = split_name(name);
    DropdownChoice { value: id.to_owned(), label: name.to_owned(), city: city.to_owned(), context: context.to_owned() }
}

fn split_name(name: &str) -> (&str, &str) {
    let comma = name.find(", ").map(|at| (at, 2));
    let dash = name.find(" - ").map(|at| (at, 3));
    let first = match (comma, dash) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (a, b) => a.or(b),
    };
    let Some((at, width)) = first else {
        return (name, "");
    };
    let rest = &name[at + width..];
    let context_end = [rest.find(", "), rest.find(" - ")].into_iter().flatten().min().unwrap_or(rest.len());
    (&name[..at], &rest[..context_end])
}

/// Group every city for the dropdown, in dataset order within each group.
///
/// The primary site splits official maps from community-contributed ones;
/// the CT site groups by county. Empty groups are dropped.
///
/// # Errors
///
/// [`DataError::UnknownCounty`] when a CT city names a county outside
/// [`CT_COUNTIES`].
pub fn create_groups(variant: SiteVariant, entries: &CityEntries) -> Result<Vec<DropdownGroup>, DataError> {
    let groups = match variant {
        SiteVariant::Primary => {
            let (community, official): (Vec<_>, Vec<_>) =
                entries.iter().partition(|entry| entry.stats.contribution().is_some());
            vec![
                group("Official maps", official.iter().map(|e| create_choice(&e.id, &e.stats.name)).collect()),
                group("Community maps", community.iter().map(|e| create_choice(&e.id, &e.stats.name)).collect()),
            ]
        }
        SiteVariant::Ct => {
            let mut by_county = vec![Vec::new(); CT_COUNTIES.len()];
            for entry in entries.iter() {
                let county = entry.stats.county().unwrap_or_default();
                let Some(slot) = CT_COUNTIES.iter().position(|known| *known == county) else {
                    return Err(DataError::UnknownCounty { id: entry.id.clone(), county: county.to_owned() });
                };
                by_county[slot].push(create_choice(&entry.id, &entry.stats.name));
            }
            CT_COUNTIES.iter().zip(by_county).map(|(label, choices)| group(label, choices)).collect()
        }
    };
    Ok(groups.into_iter().filter(|g| !g.choices.is_empty()).collect())
}

fn group(label: &str, choices: Vec<DropdownChoice>) -> DropdownGroup {
    DropdownGroup { label: label.to_owned(), choices }
}

/// Choices whose city or context contains `query`, ignoring case.
///
/// Cities that start with the query come first; otherwise results keep
/// dropdown order. An empty query matches nothing.
#[must_use]
pub fn search_choices(groups: &[DropdownGroup], query: &str, limit: usize) -> Vec<DropdownChoice> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let mut matches: Vec<(bool, &DropdownChoice)> = groups
        .iter()
        .flat_map(|group| &group.choices)
        .filter_map(|choice| {
            let city = choice.city.to_lowercase();
            if city.starts_with(&query) {
                Some((false, choice))
            } else if city.contains(&query) || choice.context.to_lowercase().contains(&query) {
                Some((true, choice))
            } else {
                None
            }
        })
        .collect();
    matches.sort_by_key(|(later, _)| *later);
    matches.into_iter().take(limit).map(|(_, choice)| choice.clone()).collect()
}
