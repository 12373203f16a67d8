//! Share button and full-screen link.
//!
//! ERROR HANDLING
//! ==============
//! A clipboard write can be refused (permissions, insecure context). That is
//! logged and the icon stays as it was; nothing is shown to the user.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

#[cfg(feature = "csr")]
async fn copy_to_clipboard(text: &str) -> Result<(), wasm_bindgen::JsValue> {
    let window = web_sys::window().ok_or_else(|| wasm_bindgen::JsValue::from_str("no window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}

#[component]
pub fn ShareLink(share_url: RwSignal<String>, reset_ms: u32) -> impl IntoView {
    let copied = RwSignal::new(false);

    let on_click = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let url = share_url.get_untracked();
            leptos::task::spawn_local(async move {
                match copy_to_clipboard(&url).await {
                    Ok(()) => {
                        copied.set(true);
                        Timeout::new(reset_ms, move || copied.set(false)).forget();
                    }
                    Err(err) => log::warn!("share link: clipboard write failed: {err:?}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("share link: clipboard unavailable, {reset_ms}ms reset unused");
        }
    };

    view! {
        <div class="share">
            <button class="share__copy" title="Copy link to this city" on:click=on_click>
                <i class=move || if copied.get() { "fa-solid fa-check" } else { "fa-solid fa-link" }></i>
            </button>
            <a class="share__fullscreen" href=move || share_url.get() target="_blank" title="Open full screen">
                <i class="fa-solid fa-up-right-from-square"></i>
            </a>
        </div>
    }
}
