//! Fetching the dataset and per-city parking lot geometry.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP requests (browser only) and `parking_lots` decides
//! when a city's geometry needs fetching at all.

pub mod api;
pub mod parking_lots;

/// Error from fetching or decoding a data file.
///
/// `Clone` because one load result is shared by every caller waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("request for {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("request for {url} failed: {status}")]
    Status { url: String, status: u16 },
    #[error("{url} is malformed: {message}")]
    Parse { url: String, message: String },
    #[error("fetching is only available in the browser")]
    Unavailable,
}
