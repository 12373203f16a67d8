//! Per-site settings.
//!
//! The same build serves two sites: the nationwide map (`primary`) and the
//! Connecticut map (`ct`). They differ in fallback city, dropdown grouping,
//! and scorecard wording. Everything else is shared.
//!
//! Settings come from an inline `<script id="site-config" type="application/json">`
//! element so the static host can switch variants without a rebuild. Every
//! field is optional and falls back to the variant's defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the inline JSON element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_DATA_BASE_PATH: &str = "/data";
pub const DEFAULT_SNAP_OFFSET_PX: f64 = -40.0;
pub const DEFAULT_MIN_CLICK_ZOOM: f64 = 7.0;
pub const DEFAULT_SHARE_RESET_MS: u32 = 1000;

/// Error returned when site overrides cannot be applied.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown site variant '{0}' (expected 'primary' or 'ct')")]
    UnknownVariant(String),
}

/// Which site this build is serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiteVariant {
    #[default]
    Primary,
    Ct,
}

impl SiteVariant {
    /// City shown when the URL names none, or names one we don't have.
    #[must_use]
    pub fn default_fallback_city(self) -> &'static str {
        match self {
            Self::Primary => "atlanta-ga",
            Self::Ct => "hartford-ct",
        }
    }

    /// What the scorecard calls the area a city's percentage covers.
    #[must_use]
    pub fn boundary_description(self) -> &'static str {
        match self {
            Self::Primary => "central city",
            Self::Ct => "district",
        }
    }
}

/// Typed site settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub variant: SiteVariant,
    pub fallback_city: String,
    /// Prefix for `city-stats.json`, `city-boundaries.geojson`, and `parking-lots/`.
    pub data_base_path: String,
    /// Vertical shift applied after snapping to a city, in screen pixels.
    pub snap_offset_px: f64,
    /// Boundary clicks only select a city when zoomed in past this level.
    pub min_click_zoom: f64,
    /// How long the share button shows its check icon.
    pub share_reset_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::for_variant(SiteVariant::Primary)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSiteConfig {
    site: Option<String>,
    fallback_city: Option<String>,
    data_base_path: Option<String>,
    snap_offset_px: Option<f64>,
    min_click_zoom: Option<f64>,
    share_reset_ms: Option<u32>,
}

impl SiteConfig {
    /// Defaults for one variant.
    #[must_use]
    pub fn for_variant(variant: SiteVariant) -> Self {
        Self {
            variant,
            fallback_city: variant.default_fallback_city().to_owned(),
            data_base_path: DEFAULT_DATA_BASE_PATH.to_owned(),
            snap_offset_px: DEFAULT_SNAP_OFFSET_PX,
            min_click_zoom: DEFAULT_MIN_CLICK_ZOOM,
            share_reset_ms: DEFAULT_SHARE_RESET_MS,
        }
    }

    /// Build settings from the inline JSON override document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON, [`ConfigError::UnknownVariant`]
    /// when `site` names neither variant.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw: RawSiteConfig = serde_json::from_str(raw)?;
        let variant = parse_variant(raw.site.as_deref())?;
        let defaults = Self::for_variant(variant);
        Ok(Self {
            variant,
            fallback_city: raw.fallback_city.unwrap_or(defaults.fallback_city),
            data_base_path: raw
                .data_base_path
                .map_or(defaults.data_base_path, |path| path.trim_end_matches('/').to_owned()),
            snap_offset_px: raw.snap_offset_px.unwrap_or(defaults.snap_offset_px),
            min_click_zoom: raw.min_click_zoom.unwrap_or(defaults.min_click_zoom),
            share_reset_ms: raw.share_reset_ms.unwrap_or(defaults.share_reset_ms),
        })
    }

    /// Read overrides from the page.
    ///
    /// A missing element means defaults. Malformed JSON is logged and also
    /// means defaults; an unknown variant is returned as an error because
    /// guessing the wrong site would show the wrong data.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownVariant`] when the page names an unknown site.
    pub fn from_document() -> Result<Self, ConfigError> {
        let Some(raw) = read_config_element() else {
            return Ok(Self::default());
        };
        match Self::from_json(&raw) {
            Err(ConfigError::Parse(err)) => {
                log::warn!("site config: ignoring malformed overrides: {err}");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// URL of the stats table.
    #[must_use]
    pub fn stats_url(&self) -> String {
        format!("{}/city-stats.json", self.data_base_path)
    }

    /// URL of the city boundary outlines.
    #[must_use]
    pub fn boundaries_url(&self) -> String {
        format!("{}/city-boundaries.geojson", self.data_base_path)
    }

    /// URL of one city's parking lot geometry.
    #[must_use]
    pub fn parking_lots_url(&self, city_id: &str) -> String {
        format!("{}/parking-lots/{city_id}.geojson", self.data_base_path)
    }
}

fn parse_variant(raw: Option<&str>) -> Result<SiteVariant, ConfigError> {
    match raw.unwrap_or("primary") {
        "primary" => Ok(SiteVariant::Primary),
        "ct" => Ok(SiteVariant::Ct),
        other => Err(ConfigError::UnknownVariant(other.to_owned())),
    }
}

fn read_config_element() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?
            .document()?
            .get_element_by_id(CONFIG_ELEMENT_ID)?
            .text_content()
            .filter(|text| !text.trim().is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
