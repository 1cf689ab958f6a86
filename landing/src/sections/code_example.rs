use crate::components::Icon;
use crate::components::icons::{ICON_CHECK, ICON_COPY};
use crate::edition::Edition;
use crate::feedback::BrowserFeedback;
use crate::samples::SampleLang;
use leptos::prelude::*;

/// Tailwind classes for a language tab.
pub fn tab_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-lg text-sm font-semibold bg-blue-600 text-white"
    } else {
        "px-4 py-2 rounded-lg text-sm font-semibold text-gray-400 hover:text-white hover:bg-gray-800"
    }
}

#[component]
pub fn CodeExample(
    edition: Edition,
    active: RwSignal<SampleLang>,
    feedback: BrowserFeedback,
    on_copy: Callback<()>,
    on_select: Callback<SampleLang>,
) -> impl IntoView {
    let shown = move || edition.sample_for(active.get()).code();

    if edition == Edition::Launch {
        return view! {
            <div id="quickstart" class="bg-gray-900 rounded-xl p-6 mb-16">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-white font-semibold">"Quick Integration Example"</h3>
                    <button
                        type="button"
                        class="flex items-center gap-2 text-gray-400 hover:text-white transition-colors"
                        on:click=move |_| on_copy.run(())
                    >
                        <Icon paths=ICON_COPY class="w-4 h-4" />
                        {move || feedback.label()}
                    </button>
                </div>
                <pre class="text-gray-300 overflow-x-auto">
                    <code>{shown}</code>
                </pre>
            </div>
        }
        .into_any();
    }

    let icon = move || {
        if edition.swaps_copy_icon() && feedback.is_copied() {
            view! { <Icon paths=ICON_CHECK class="w-4 h-4" /> }.into_any()
        } else {
            view! { <Icon paths=ICON_COPY class="w-4 h-4" /> }.into_any()
        }
    };

    view! {
        <div id="quickstart" class="bg-gray-900 rounded-2xl p-8 mb-24 shadow-2xl">
            <div class="flex justify-between items-center mb-6">
                <div>
                    <h3 class="text-white font-semibold text-xl mb-2">"Quick Integration Example"</h3>
                    <p class="text-gray-400">"Copy and paste this code to get started"</p>
                </div>
                <button
                    type="button"
                    class="flex items-center gap-2 bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-colors"
                    on:click=move |_| on_copy.run(())
                >
                    {icon}
                    {move || feedback.label()}
                </button>
            </div>
            {edition.has_tabs().then(|| view! { <SampleTabs active=active on_select=on_select /> })}
            <pre class="text-gray-300 overflow-x-auto bg-gray-800/50 p-6 rounded-xl">
                <code>{shown}</code>
            </pre>
        </div>
    }
    .into_any()
}

#[component]
fn SampleTabs(active: RwSignal<SampleLang>, on_select: Callback<SampleLang>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 mb-4" role="tablist">
            {SampleLang::ALL
                .into_iter()
                .map(|lang| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            data-tab=lang.key()
                            aria-selected=move || (active.get() == lang).to_string()
                            class=move || tab_class(active.get() == lang)
                            on:click=move |_| on_select.run(lang)
                        >
                            {lang.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
