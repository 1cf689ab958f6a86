use crate::components::Icon;
use crate::components::icons::ICON_ARROW_RIGHT;
use crate::edition::Edition;
use leptos::prelude::*;

/// Final call to action at the bottom of the page.
#[component]
pub fn Closing(edition: Edition) -> impl IntoView {
    let copy = edition.closing();

    match copy.heading {
        None => view! {
            <div class="text-center">
                <a
                    href="#quickstart"
                    class="bg-blue-600 text-white px-12 py-6 rounded-lg text-xl font-semibold hover:bg-blue-700 transition-colors inline-flex items-center mx-auto gap-2"
                >
                    {copy.button}
                    <Icon paths=ICON_ARROW_RIGHT class="w-6 h-6" />
                </a>
            </div>
        }
        .into_any(),
        Some(heading) => view! {
            <div class="text-center bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl p-12 shadow-2xl">
                <h2 class="text-3xl md:text-4xl font-bold text-white mb-6">{heading}</h2>
                {copy.body.map(|body| view! {
                    <p class="text-white/90 text-xl mb-8 max-w-2xl mx-auto">{body}</p>
                })}
                <a
                    href="#quickstart"
                    class="bg-white text-blue-600 px-12 py-6 rounded-xl text-xl font-semibold hover:bg-gray-50 transition-all transform hover:scale-105 inline-flex items-center mx-auto gap-2 shadow-lg"
                >
                    {copy.button}
                    <Icon paths=ICON_ARROW_RIGHT class="w-6 h-6" />
                </a>
            </div>
        }
        .into_any(),
    }
}
