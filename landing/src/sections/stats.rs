use crate::edition::Stat;
use leptos::prelude::*;

#[component]
pub fn Stats(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-8 mb-24 bg-white/80 backdrop-blur-lg rounded-2xl p-8 shadow-xl">
            {stats
                .iter()
                .map(|stat| {
                    view! {
                        <div class="text-center">
                            <h3 class="text-3xl md:text-4xl font-bold text-gray-900 mb-2">{stat.value}</h3>
                            <p class="text-gray-600">{stat.label}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
