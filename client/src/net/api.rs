//! HTTP fetches for the static data files.
//!
//! Client-side (csr): real requests via `gloo-net`.
//! Native builds (tests): every fetch returns [`LoadError::Unavailable`], so
//! the coordination logic above this module is tested with fake sources.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`LoadError`] values, never panics. The loader
//! decides whether to retry; startup shows the message in place of the map.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use mapview::geo::FeatureCollection;

use super::LoadError;
use super::parking_lots::DetailSource;
use crate::config::SiteConfig;

/// Raw bodies of the two files every page needs before it can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetText {
    pub stats: String,
    pub boundaries: String,
}

/// GET `url` and return the body as text.
///
/// # Errors
///
/// [`LoadError::Network`] when the request cannot be made, [`LoadError::Status`]
/// for non-2xx responses, [`LoadError::Unavailable`] outside the browser.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| network_error(url, &e))?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(LoadError::Status { url: url.to_owned(), status });
        }
        resp.text().await.map_err(|e| network_error(url, &e))
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("fetch_text({url}) outside the browser");
        Err(LoadError::Unavailable)
    }
}

/// Fetch the stats table and boundary outlines.
///
/// # Errors
///
/// The first [`LoadError`] from either request.
pub async fn fetch_dataset(config: &SiteConfig) -> Result<DatasetText, LoadError> {
    let (stats, boundaries) =
        futures::future::join(fetch_text(&config.stats_url()), fetch_text(&config.boundaries_url())).await;
    Ok(DatasetText { stats: stats?, boundaries: boundaries? })
}

/// Parking lot geometry served as `<base>/parking-lots/<id>.geojson`.
#[derive(Debug, Clone)]
pub struct HttpDetailSource {
    config: Rc<SiteConfig>,
}

impl HttpDetailSource {
    #[must_use]
    pub fn new(config: Rc<SiteConfig>) -> Self {
        Self { config }
    }
}

impl DetailSource for HttpDetailSource {
    fn fetch(&self, city_id: &str) -> LocalBoxFuture<'static, Result<FeatureCollection, LoadError>> {
        let url = self.config.parking_lots_url(city_id);
        async move {
            let body = fetch_text(&url).await?;
            decode_parking_lots(&url, &body)
        }
        .boxed_local()
    }
}

fn decode_parking_lots(url: &str, body: &str) -> Result<FeatureCollection, LoadError> {
    FeatureCollection::from_json(body).map_err(|e| LoadError::Parse { url: url.to_owned(), message: e.to_string() })
}

#[cfg(feature = "csr")]
fn network_error(url: &str, err: &gloo_net::Error) -> LoadError {
    LoadError::Network { url: url.to_owned(), message: err.to_string() }
}
