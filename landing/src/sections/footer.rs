use crate::edition::Edition;
use leptos::prelude::*;

#[component]
pub fn Footer(current: Edition) -> impl IntoView {
    view! {
        <footer class="max-w-6xl mx-auto px-4 pb-12 relative">
            <div class="flex flex-col md:flex-row justify-between items-center gap-4 text-sm text-gray-500">
                <span class="font-semibold text-gray-700">"Synlink"</span>
                <nav class="flex gap-4" aria-label="Page revisions">
                    {Edition::ALL
                        .into_iter()
                        .map(|edition| {
                            let class = if edition == current {
                                "text-blue-600 font-semibold"
                            } else {
                                "hover:text-gray-800"
                            };
                            view! {
                                <a href=edition.path() class=class>
                                    {edition.name()}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <p>"Razorpay integration, minus the paperwork."</p>
            </div>
        </footer>
    }
}
