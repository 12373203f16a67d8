//! Root application component.
//!
//! Reads the site configuration from the page, fetches the dataset, and
//! mounts the map page once both files have arrived. Any failure on the way
//! replaces the whole page with a plain error message.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::bootstrap::StartupError;
use crate::config::{SiteConfig, SiteVariant};
use crate::net::api::DatasetText;
use crate::pages::map::{MapPageView, startup_error_view};

#[cfg(feature = "csr")]
use crate::net::api::fetch_dataset;

/// Where the dataset fetch stands.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DatasetStatus {
    Loading,
    Ready(DatasetText),
    Failed(String),
}

fn page_title(variant: SiteVariant) -> &'static str {
    match variant {
        SiteVariant::Primary => "Parking Lot Map",
        SiteVariant::Ct => "Connecticut Parking Lot Map",
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = match SiteConfig::from_document() {
        Ok(config) => config,
        Err(err) => {
            let err = StartupError::from(err);
            log::error!("startup: {err}");
            return startup_error_view(err.to_string());
        }
    };

    let status = RwSignal::new(DatasetStatus::Loading);

    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match fetch_dataset(&config).await {
                Ok(text) => status.set(DatasetStatus::Ready(text)),
                Err(err) => {
                    let err = StartupError::from(err);
                    log::error!("startup: {err}");
                    status.set(DatasetStatus::Failed(err.to_string()));
                }
            }
        });
    }

    let title = page_title(config.variant);

    view! {
        <Title text=title/>
        {move || match status.get() {
            DatasetStatus::Loading => view! { <p class="loading">"Loading map..."</p> }.into_any(),
            DatasetStatus::Ready(text) => view! { <MapPageView config=config.clone() text/> }.into_any(),
            DatasetStatus::Failed(message) => startup_error_view(message),
        }}
    }
    .into_any()
}
