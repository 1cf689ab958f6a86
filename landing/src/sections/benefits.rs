use crate::components::Icon;
use crate::edition::{Benefit, Edition};
use leptos::prelude::*;

#[component]
pub fn Benefits(edition: Edition) -> impl IntoView {
    let grid_class = if edition == Edition::Launch {
        "grid md:grid-cols-2 lg:grid-cols-4 gap-8 mb-16"
    } else {
        "grid md:grid-cols-2 lg:grid-cols-4 gap-8 mb-24"
    };

    view! {
        <div class=grid_class>
            {edition
                .benefits()
                .iter()
                .map(|benefit| {
                    if edition == Edition::Launch {
                        view! { <PlainCard benefit=benefit /> }.into_any()
                    } else {
                        view! { <GlassCard benefit=benefit /> }.into_any()
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn PlainCard(benefit: &'static Benefit) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-xl shadow-lg hover:shadow-xl transition-shadow">
            <Icon paths=benefit.icon class="w-12 h-12 text-blue-600 mb-4" />
            <h3 class="text-xl font-semibold mb-2">{benefit.title}</h3>
            <p class="text-gray-600">{benefit.description}</p>
        </div>
    }
}

#[component]
fn GlassCard(benefit: &'static Benefit) -> impl IntoView {
    view! {
        <div class="bg-white/80 backdrop-blur-lg p-8 rounded-2xl shadow-xl hover:shadow-2xl transition-all transform hover:-translate-y-1">
            <div class="bg-gradient-to-br from-blue-100 to-purple-100 p-4 rounded-xl inline-block mb-6">
                <Icon paths=benefit.icon class="w-8 h-8 text-blue-600" />
            </div>
            <h3 class="text-xl font-semibold mb-4">{benefit.title}</h3>
            <p class="text-gray-600 leading-relaxed">{benefit.description}</p>
        </div>
    }
}
