use crate::components::Icon;
use crate::components::icons::{ICON_ARROW_RIGHT, ICON_CHEVRON_RIGHT};
use crate::edition::Edition;
use crate::feedback::{EntryAnimation, reveal_classes};
use leptos::prelude::*;

#[component]
pub fn Hero(edition: Edition, entry: EntryAnimation, on_demo: Callback<()>) -> impl IntoView {
    let copy = edition.hero();

    if edition == Edition::Launch {
        return view! {
            <div class="text-center mb-16">
                <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6">
                    {copy.title[0]}
                    <br />
                    {copy.title[1]}
                </h1>
                <p class="text-xl text-gray-600 mb-8">{copy.tagline}</p>
                <a
                    href="#quickstart"
                    class="bg-blue-600 text-white px-8 py-4 rounded-lg text-lg font-semibold hover:bg-blue-700 transition-colors inline-flex items-center mx-auto gap-2"
                >
                    {copy.primary}
                    <Icon paths=ICON_ARROW_RIGHT class="w-5 h-5" />
                </a>
            </div>
        }
        .into_any();
    }

    let reveal = move || {
        if edition.animates_entry() {
            reveal_classes(entry.is_visible())
        } else {
            ""
        }
    };

    view! {
        <div class="text-center mb-24">
            <div class=reveal>
                {copy.badge.map(|badge| view! {
                    <span class="inline-block bg-blue-100 text-blue-600 px-4 py-2 rounded-full text-sm font-semibold mb-6">
                        {badge}
                    </span>
                })}
                <h1 class="text-5xl md:text-7xl font-bold text-gray-900 mb-6 bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-purple-600">
                    {copy.title[0]}
                    <br />
                    {copy.title[1]}
                </h1>
                <p class="text-xl md:text-2xl text-gray-600 mb-12 max-w-3xl mx-auto">
                    {copy.tagline}
                </p>
                <div class="flex flex-col md:flex-row gap-4 justify-center items-center">
                    <a
                        href="#quickstart"
                        class="bg-gradient-to-r from-blue-600 to-purple-600 text-white px-8 py-4 rounded-xl text-lg font-semibold hover:opacity-90 transition-all transform hover:scale-105 flex items-center gap-2 shadow-lg"
                    >
                        {copy.primary}
                        <Icon paths=ICON_ARROW_RIGHT class="w-5 h-5" />
                    </a>
                    {copy.secondary.map(|label| view! {
                        <button
                            type="button"
                            class="bg-white text-gray-800 px-8 py-4 rounded-xl text-lg font-semibold hover:bg-gray-50 transition-all border border-gray-200 flex items-center gap-2"
                            on:click=move |_| {
                                if edition.schedules_demo() {
                                    on_demo.run(());
                                }
                            }
                        >
                            {label}
                            <Icon paths=ICON_CHEVRON_RIGHT class="w-5 h-5" />
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
    .into_any()
}
