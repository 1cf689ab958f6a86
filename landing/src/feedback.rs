//! Transient UI feedback: the "Copied!" label and the entry fade-in.
//!
//! Both are plain reactive flags. The copy flag is cleared by a single-fire
//! timer whose handle is kept so an overlapping copy or a teardown can cancel
//! it.

use std::time::Duration;

use leptos::prelude::*;

pub const COPY_LABEL: &str = "Copy code";
pub const COPIED_LABEL: &str = "Copied!";

/// One-shot deferred callbacks.
pub trait Timers {
    type Handle: Copy + Send + Sync + 'static;

    /// Runs `callback` once after `delay`. `None` when the platform refused.
    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce() + 'static>,
    ) -> Option<Self::Handle>;

    /// Cancelling a handle that already fired is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// `window.setTimeout` via Leptos.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
    type Handle = TimeoutHandle;

    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce() + 'static>,
    ) -> Option<Self::Handle> {
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::warn!("[feedback] could not schedule reset: {err:?}");
                None
            }
        }
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.clear();
    }
}

pub fn copy_label(copied: bool) -> &'static str {
    if copied { COPIED_LABEL } else { COPY_LABEL }
}

/// State behind a copy button.
pub struct CopyFeedback<H: Send + Sync + 'static> {
    copied: RwSignal<bool>,
    pending: StoredValue<Option<H>>,
}

impl<H: Send + Sync + 'static> Clone for CopyFeedback<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: Send + Sync + 'static> Copy for CopyFeedback<H> {}

pub type BrowserFeedback = CopyFeedback<TimeoutHandle>;

impl<H: Copy + Send + Sync + 'static> Default for CopyFeedback<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy + Send + Sync + 'static> CopyFeedback<H> {
    pub fn new() -> Self {
        Self {
            copied: RwSignal::new(false),
            pending: StoredValue::new(None),
        }
    }

    /// Tracked read, for use inside views.
    pub fn is_copied(&self) -> bool {
        self.copied.get()
    }

    pub fn label(&self) -> &'static str {
        copy_label(self.is_copied())
    }

    /// Sets the flag and (re)starts the reset timer.
    pub fn mark_copied<T>(&self, timers: &T, reset_after: Duration)
    where
        T: Timers<Handle = H>,
    {
        self.cancel_pending(timers);
        self.copied.set(true);

        let copied = self.copied;
        let handle = timers.schedule(
            reset_after,
            Box::new(move || {
                // Signal may already be disposed with its owner.
                let _ = copied.try_set(false);
            }),
        );
        let _ = self.pending.try_update_value(|slot| *slot = handle);
    }

    /// Drops the pending reset, if any. Safe after the owner is gone.
    pub fn cancel_pending<T>(&self, timers: &T)
    where
        T: Timers<Handle = H>,
    {
        if let Some(handle) = self.pending.try_update_value(Option::take).flatten() {
            timers.cancel(handle);
        }
    }
}

/// One-shot entry animation flag.
#[derive(Debug, Clone, Copy)]
pub struct EntryAnimation {
    visible: RwSignal<bool>,
}

impl Default for EntryAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryAnimation {
    pub fn new() -> Self {
        Self {
            visible: RwSignal::new(false),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Flips the flag to visible. Returns whether this call did the flip.
    pub fn reveal(&self) -> bool {
        if self.visible.get_untracked() {
            return false;
        }
        self.visible.set(true);
        true
    }
}

/// Tailwind classes for the hero block while fading in.
pub fn reveal_classes(visible: bool) -> &'static str {
    if visible {
        "transform transition-all duration-1000 translate-y-0 opacity-100"
    } else {
        "transform transition-all duration-1000 translate-y-10 opacity-0"
    }
}
