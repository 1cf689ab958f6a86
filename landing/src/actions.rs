//! User-triggered actions of the landing page.

use std::time::Duration;

use leptos::prelude::*;

use crate::feedback::{CopyFeedback, Timers};
use crate::platform::Platform;
use crate::samples::SampleLang;

/// Puts `text` on the clipboard and shows "Copied!" for `reset_after`.
pub fn copy_code<P, T>(
    platform: &P,
    timers: &T,
    feedback: &CopyFeedback<T::Handle>,
    text: &str,
    reset_after: Duration,
) where
    P: Platform,
    T: Timers,
{
    platform.write_clipboard(text);
    feedback.mark_copied(timers, reset_after);
}

pub fn select_tab(active: RwSignal<SampleLang>, tab: SampleLang) {
    active.set(tab);
}

pub fn open_demo_link<P: Platform>(platform: &P, url: &str) {
    platform.open_in_new_tab(url);
}
