// Second revision of the page, kept online under /v2
use super::LandingPage;
use crate::edition::Edition;
use leptos::prelude::*;

#[component]
pub fn ShowcasePage() -> impl IntoView {
    view! { <LandingPage edition=Edition::Showcase /> }
}
