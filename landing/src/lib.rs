//! # synlink-landing
//!
//! Marketing page for Synlink, a Razorpay integration service. Rendered
//! client-side with Leptos 0.8 and served as a WebAssembly bundle by `trunk`.
//!
//! ## Layout
//!
//! - [`pages`] - route-level components; [`pages::LandingPage`] owns all state
//! - [`actions`] - copy, tab selection and demo booking
//! - [`feedback`] - "Copied!" flag with its cancellable reset, entry animation
//! - [`platform`] - clipboard and new-tab capabilities
//! - [`samples`] - the quick-start code samples
//! - [`edition`] - the three published revisions of the page and their copy
//! - [`config`] - build-time configuration
//!
//! Logic that touches the browser sits behind the [`platform::Platform`] and
//! [`feedback::Timers`] traits so it can be exercised natively in tests.

pub mod actions;
pub mod components;
pub mod config;
pub mod edition;
pub mod feedback;
pub mod pages;
pub mod platform;
pub mod samples;
pub mod sections;
pub mod styles;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub use config::SiteConfig;
pub use edition::Edition;
pub use samples::SampleLang;

use pages::{HomePage, LaunchPage, ShowcasePage};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <main>
                <Routes fallback=HomePage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/v1") view=LaunchPage />
                    <Route path=path!("/v2") view=ShowcasePage />
                </Routes>
            </main>
        </Router>
    }
}

/// Browser entry point: logging, panic hook, mount.
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match SiteConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    _ = console_log::init_with_level(config.log_level);
    if let Some(err) = config_error {
        log::warn!("[config] {err}; using defaults");
    }
    log::debug!("[config] {config:?}");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
