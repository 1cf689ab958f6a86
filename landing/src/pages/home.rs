// Home page - the current revision
use super::LandingPage;
use crate::edition::Edition;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <LandingPage edition=Edition::Multilang /> }
}
