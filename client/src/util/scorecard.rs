//! Scorecard text for the selected city.
//!
//! Formatting is kept apart from the view so both sites' wording can be
//! checked without a DOM. The view only decides markup: the header, a
//! collapsible "Additional details" list, and links where an entry has one.

#[cfg(test)]
#[path = "scorecard_test.rs"]
mod scorecard_test;

use crate::config::SiteVariant;
use crate::model::CityStats;

/// Banner over community-contributed maps.
pub const COMMUNITY_WARNING: &str = "Community-maintained map";

/// Text of the link that trails a reform line.
pub const REFORM_DETAILS_LABEL: &str = "details";

/// One line in the details list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScorecardEntry {
    Text(String),
    /// Reform status, optionally linking to details.
    Reform { status: String, url: Option<String> },
    /// Contact link for the maintainer of a community map.
    Maintainer { email: String },
}

impl ScorecardEntry {
    /// The line as plain text, without link markup.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Reform { status, .. } => format!("Parking reforms {status}"),
            Self::Maintainer { .. } => "Email data maintainer".to_owned(),
        }
    }

    /// Reform details page, linked after the line's text rather than from it.
    #[must_use]
    pub fn details_url(&self) -> Option<&str> {
        match self {
            Self::Reform { url, .. } => url.as_deref(),
            _ => None,
        }
    }
}

/// Everything the scorecard shows for one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorecardValues {
    pub title: String,
    pub summary: String,
    /// Shown for maps maintained by the community rather than the site.
    pub community_warning: Option<&'static str>,
    pub entries: Vec<ScorecardEntry>,
}

/// Title and summary line.
#[must_use]
pub fn format_header(name: &str, percentage: &str, boundary_description: &str) -> (String, String) {
    (format!("Parking lots in {name}"), format!("{percentage} of the {boundary_description} is off-street parking"))
}

#[must_use]
pub fn format_reform_line(status: &str, url: Option<&str>) -> ScorecardEntry {
    ScorecardEntry::Reform { status: status.to_owned(), url: url.map(str::to_owned) }
}

/// Scorecard for `stats` in the given site's wording.
#[must_use]
pub fn format_scorecard(variant: SiteVariant, stats: &CityStats) -> ScorecardValues {
    let (title, summary) = format_header(&stats.name, &stats.percentage, variant.boundary_description());
    let reform = stats.reforms().map(|status| format_reform_line(status, stats.url()));
    match variant {
        SiteVariant::Primary => {
            let mut entries = Vec::new();
            if let Some(score) = stats.parking_score() {
                entries.push(ScorecardEntry::Text(format!("{score}/100 parking score (lower is better)")));
            }
            entries.push(ScorecardEntry::Text(format!("City type: {}", stats.city_type().unwrap_or_default())));
            entries.push(ScorecardEntry::Text(format!("{} residents - city proper", stats.population)));
            entries.push(ScorecardEntry::Text(format!(
                "{} residents - urbanized area",
                stats.urbanized_area_population().unwrap_or_default()
            )));
            entries.extend(reform);
            if let Some(email) = stats.contribution() {
                entries.push(ScorecardEntry::Maintainer { email: email.to_owned() });
            }
            let community_warning = stats.contribution().map(|_| COMMUNITY_WARNING);
            ScorecardValues { title, summary, community_warning, entries }
        }
        SiteVariant::Ct => {
            let mut entries = vec![ScorecardEntry::Text(format!("{} city residents", stats.population))];
            entries.extend(reform);
            ScorecardValues { title, summary, community_warning: None, entries }
        }
    }
}
