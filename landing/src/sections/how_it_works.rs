use crate::edition::Step;
use leptos::prelude::*;

#[component]
pub fn HowItWorks(steps: &'static [Step]) -> impl IntoView {
    view! {
        <section id="how-it-works" class="mb-16">
            <h2 class="text-3xl font-bold text-center mb-8">"How It Works"</h2>
            <div class="grid md:grid-cols-3 gap-8">
                {steps
                    .iter()
                    .map(|step| {
                        view! {
                            <div class="text-center">
                                <div class="w-12 h-12 bg-blue-600 text-white rounded-full flex items-center justify-center text-xl font-bold mx-auto mb-4">
                                    {step.number}
                                </div>
                                <h3 class="text-xl font-semibold mb-2">{step.title}</h3>
                                <p class="text-gray-600">{step.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
