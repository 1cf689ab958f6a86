// First revision of the page, kept online under /v1
use super::LandingPage;
use crate::edition::Edition;
use leptos::prelude::*;

#[component]
pub fn LaunchPage() -> impl IntoView {
    view! { <LandingPage edition=Edition::Launch /> }
}
