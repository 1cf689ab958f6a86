//! Inline SVG icons (Lucide, 24x24 stroke set).

use leptos::prelude::*;

/// Renders a stroke icon from its path list.
///
/// ```rust,ignore
/// view! { <Icon paths=ICON_ARROW_RIGHT class="w-5 h-5" /> }
/// ```
#[component]
pub fn Icon(
    /// `d` attributes, one per stroke path
    paths: &'static [&'static str],
    /// Tailwind sizing and color classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {paths.iter().copied().map(|d| view! { <path d=d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

pub const ICON_ARROW_RIGHT: &[&str] = &["M5 12h14", "m12 5 7 7-7 7"];

pub const ICON_CHEVRON_RIGHT: &[&str] = &["m9 18 6-6-6-6"];

pub const ICON_KEY: &[&str] = &[
    "m15.5 7.5 2.3 2.3a1 1 0 0 0 1.4 0l2.1-2.1a1 1 0 0 0 0-1.4L19 4",
    "m21 2-9.6 9.6",
    "M2 15.5a5.5 5.5 0 1 0 11 0a5.5 5.5 0 1 0-11 0",
];

pub const ICON_ZAP: &[&str] = &[
    "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
];

pub const ICON_SMARTPHONE: &[&str] = &[
    "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
    "M12 18h.01",
];

pub const ICON_LOCK: &[&str] = &[
    "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
    "M7 11V7a5 5 0 0 1 10 0v4",
];

pub const ICON_COPY: &[&str] = &[
    "M10 8h10a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H10a2 2 0 0 1-2-2V10a2 2 0 0 1 2-2z",
    "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2",
];

pub const ICON_CHECK: &[&str] = &["M20 6 9 17l-5-5"];
