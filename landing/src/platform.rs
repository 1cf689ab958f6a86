//! Browser capabilities the page relies on: clipboard writes and new tabs.
//!
//! Both are best-effort. Failures are logged and never reach the user.

use leptos::task::spawn_local;
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no browser window available")]
    NoWindow,
    #[error("clipboard write rejected: {0}")]
    Clipboard(String),
    #[error("could not open {url}: {reason}")]
    Popup { url: String, reason: String },
}

pub trait Platform {
    /// Fire-and-forget clipboard write.
    fn write_clipboard(&self, text: &str);

    /// Opens `url` in a new browsing context, leaving the page as is.
    fn open_in_new_tab(&self, url: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

impl BrowserPlatform {
    fn window() -> Result<web_sys::Window, PlatformError> {
        web_sys::window().ok_or(PlatformError::NoWindow)
    }

    fn try_open(url: &str) -> Result<(), PlatformError> {
        let window = Self::window()?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(PlatformError::Popup {
                url: url.to_string(),
                reason: "blocked by the browser".to_string(),
            }),
            Err(err) => Err(PlatformError::Popup {
                url: url.to_string(),
                reason: describe_js(&err),
            }),
        }
    }
}

impl Platform for BrowserPlatform {
    fn write_clipboard(&self, text: &str) {
        let promise = match Self::window() {
            Ok(window) => window.navigator().clipboard().write_text(text),
            Err(err) => {
                log::warn!("[clipboard] {err}");
                return;
            }
        };

        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::warn!("[clipboard] {}", PlatformError::Clipboard(describe_js(&err)));
            }
        });
    }

    fn open_in_new_tab(&self, url: &str) {
        match Self::try_open(url) {
            Ok(()) => log::debug!("[demo] opened {url}"),
            Err(err) => log::warn!("[demo] {err}"),
        }
    }
}

/// Best-effort text for a rejected promise or thrown value.
fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .filter(|s| s != "{}")
        .unwrap_or_else(|| format!("{value:?}"))
}
