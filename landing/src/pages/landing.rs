// Landing page - owns every piece of page state and hands it to the sections
use crate::actions::{copy_code, open_demo_link, select_tab};
use crate::config::SiteConfig;
use crate::edition::Edition;
use crate::feedback::{BrowserFeedback, BrowserTimers, EntryAnimation};
use crate::platform::BrowserPlatform;
use crate::samples::SampleLang;
use crate::sections::{
    Backdrop, Benefits, Closing, CodeExample, Footer, Hero, HowItWorks, Stats,
};
use leptos::prelude::*;

#[component]
pub fn LandingPage(edition: Edition) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let platform = BrowserPlatform;
    let timers = BrowserTimers;

    let feedback = BrowserFeedback::new();
    let active = RwSignal::new(SampleLang::default());
    let entry = EntryAnimation::new();

    log::debug!("[landing] mounting {:?} revision", edition);

    // Runs once after the first render; reads nothing reactive.
    Effect::new(move || {
        entry.reveal();
    });

    on_cleanup(move || feedback.cancel_pending(&timers));

    let reset_after = config.copy_reset;
    let on_copy = Callback::new(move |_: ()| {
        let sample = edition.sample_for(active.get_untracked());
        copy_code(&platform, &timers, &feedback, sample.code(), reset_after);
    });

    let demo_url = config.demo_url;
    let on_demo = Callback::new(move |_: ()| open_demo_link(&platform, demo_url));

    let on_select = Callback::new(move |tab: SampleLang| select_tab(active, tab));

    let root_class = if edition == Edition::Launch {
        "min-h-screen bg-gradient-to-b from-blue-50 to-white"
    } else {
        "min-h-screen bg-gradient-to-br from-blue-50 via-indigo-50 to-purple-50"
    };

    let steps = edition.steps();
    let stats = edition.stats();

    view! {
        <div class=root_class>
            {edition.has_backdrop().then(|| view! { <Backdrop /> })}
            <div class="max-w-6xl mx-auto px-4 py-16 relative">
                <Hero edition=edition entry=entry on_demo=on_demo />
                {(!stats.is_empty()).then(|| view! { <Stats stats=stats /> })}
                <Benefits edition=edition />
                {(!steps.is_empty()).then(|| view! { <HowItWorks steps=steps /> })}
                <CodeExample
                    edition=edition
                    active=active
                    feedback=feedback
                    on_copy=on_copy
                    on_select=on_select
                />
                <Closing edition=edition />
            </div>
            <Footer current=edition />
        </div>
    }
}
