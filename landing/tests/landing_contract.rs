//! Behaviour of the landing page actions, driven through in-memory fakes for
//! the clipboard, new-tab and timer capabilities.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use leptos::prelude::*;
use pretty_assertions::assert_eq;
use synlink_landing::actions::{copy_code, open_demo_link, select_tab};
use synlink_landing::config::{COPY_RESET, DEMO_URL};
use synlink_landing::edition::Edition;
use synlink_landing::feedback::{COPIED_LABEL, COPY_LABEL, CopyFeedback, Timers};
use synlink_landing::platform::Platform;
use synlink_landing::samples::SampleLang;

#[derive(Default)]
struct RecordingPlatform {
    clipboard: RefCell<Vec<String>>,
    opened: RefCell<Vec<String>>,
}

impl RecordingPlatform {
    fn clipboard(&self) -> Option<String> {
        self.clipboard.borrow().last().cloned()
    }
}

impl Platform for RecordingPlatform {
    fn write_clipboard(&self, text: &str) {
        self.clipboard.borrow_mut().push(text.to_string());
    }

    fn open_in_new_tab(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}

type Scheduled = (usize, Duration, Box<dyn FnOnce()>);

/// Timers on a manual clock. Nothing fires until [`ManualTimers::advance`].
#[derive(Default)]
struct ManualTimers {
    now: Cell<Duration>,
    next_id: Cell<usize>,
    queue: RefCell<Vec<Scheduled>>,
    cancelled: Cell<usize>,
}

impl ManualTimers {
    fn advance(&self, by: Duration) {
        let now = self.now.get() + by;
        self.now.set(now);
        let due: Vec<Scheduled> = {
            let mut queue = self.queue.borrow_mut();
            let (due, pending): (Vec<Scheduled>, Vec<Scheduled>) =
                queue.drain(..).partition(|(_, at, _)| *at <= now);
            *queue = pending;
            due
        };
        for (_, _, callback) in due {
            callback();
        }
    }

    fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl Timers for ManualTimers {
    type Handle = usize;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) -> Option<usize> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.queue
            .borrow_mut()
            .push((id, self.now.get() + delay, callback));
        Some(id)
    }

    fn cancel(&self, handle: usize) {
        let mut queue = self.queue.borrow_mut();
        let before = queue.len();
        queue.retain(|(id, _, _)| *id != handle);
        if queue.len() < before {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// What the page's copy button does for `edition`.
fn press_copy(
    platform: &RecordingPlatform,
    timers: &ManualTimers,
    feedback: &CopyFeedback<usize>,
    edition: Edition,
    active: RwSignal<SampleLang>,
) {
    let sample = edition.sample_for(active.get_untracked());
    copy_code(platform, timers, feedback, sample.code(), COPY_RESET);
}

#[test]
fn copy_puts_the_selected_sample_on_the_clipboard() {
    let owner = Owner::new();
    owner.with(|| {
        let platform = RecordingPlatform::default();
        let timers = ManualTimers::default();
        let feedback = CopyFeedback::new();
        let active = RwSignal::new(SampleLang::default());

        for lang in SampleLang::ALL {
            select_tab(active, lang);
            press_copy(&platform, &timers, &feedback, Edition::Multilang, active);
            assert_eq!(platform.clipboard().as_deref(), Some(lang.code()));
        }
        assert_eq!(platform.clipboard.borrow().len(), 4);
    });
}

#[test]
fn earlier_revisions_always_copy_curl() {
    let owner = Owner::new();
    owner.with(|| {
        let platform = RecordingPlatform::default();
        let timers = ManualTimers::default();
        let feedback = CopyFeedback::new();
        let active = RwSignal::new(SampleLang::Java);

        for edition in [Edition::Launch, Edition::Showcase] {
            press_copy(&platform, &timers, &feedback, edition, active);
            assert_eq!(platform.clipboard().as_deref(), Some(SampleLang::Curl.code()));
        }
    });
}

#[test]
fn label_reverts_after_exactly_two_seconds() {
    let owner = Owner::new();
    owner.with(|| {
        let platform = RecordingPlatform::default();
        let timers = ManualTimers::default();
        let feedback = CopyFeedback::new();

        assert_eq!(feedback.label(), COPY_LABEL);
        copy_code(&platform, &timers, &feedback, "x", COPY_RESET);
        assert_eq!(feedback.label(), COPIED_LABEL);

        timers.advance(ms(1999));
        assert_eq!(feedback.label(), COPIED_LABEL);

        timers.advance(ms(1));
        assert_eq!(feedback.label(), COPY_LABEL);
        assert_eq!(timers.pending(), 0);
    });
}

#[test]
fn overlapping_copy_restarts_the_reset() {
    let owner = Owner::new();
    owner.with(|| {
        let platform = RecordingPlatform::default();
        let timers = ManualTimers::default();
        let feedback = CopyFeedback::new();

        copy_code(&platform, &timers, &feedback, "first", COPY_RESET);
        timers.advance(ms(1500));
        copy_code(&platform, &timers, &feedback, "second", COPY_RESET);

        assert_eq!(timers.pending(), 1);
        assert_eq!(timers.cancelled.get(), 1);

        // First timer would have fired at 2000ms.
        timers.advance(ms(600));
        assert!(feedback.is_copied());

        timers.advance(ms(1400));
        assert!(!feedback.is_copied());
        assert_eq!(platform.clipboard().as_deref(), Some("second"));
    });
}

#[test]
fn selecting_a_tab_changes_only_the_selection() {
    let owner = Owner::new();
    owner.with(|| {
        let active = RwSignal::new(SampleLang::default());
        assert_eq!(active.get_untracked(), SampleLang::Curl);

        select_tab(active, SampleLang::Node);
        assert_eq!(active.get_untracked(), SampleLang::Node);
        assert_eq!(
            Edition::Multilang.sample_for(active.get_untracked()).code(),
            SampleLang::Node.code()
        );
    });
}

#[test]
fn demo_link_opens_the_booking_page() {
    let platform = RecordingPlatform::default();
    open_demo_link(&platform, DEMO_URL);

    assert_eq!(
        *platform.opened.borrow(),
        vec!["https://calendly.com/synlink-demo/30min".to_string()]
    );
    assert!(platform.clipboard.borrow().is_empty());
}

#[test]
fn teardown_cancels_the_pending_reset() {
    let platform = RecordingPlatform::default();
    let timers = ManualTimers::default();

    let owner = Owner::new();
    let feedback = owner.with(|| {
        let feedback = CopyFeedback::new();
        copy_code(&platform, &timers, &feedback, "x", COPY_RESET);
        feedback
    });
    assert_eq!(timers.pending(), 1);

    // What the page registers with on_cleanup.
    feedback.cancel_pending(&timers);
    owner.cleanup();

    assert_eq!(timers.pending(), 0);
    timers.advance(ms(5000));
}

#[test]
fn stale_reset_after_teardown_is_a_no_op() {
    let platform = RecordingPlatform::default();
    let timers = ManualTimers::default();

    let owner = Owner::new();
    let feedback = owner.with(|| {
        let feedback = CopyFeedback::new();
        copy_code(&platform, &timers, &feedback, "x", COPY_RESET);
        feedback
    });
    owner.cleanup();

    // Callback runs against disposed state and must not panic.
    timers.advance(COPY_RESET);
    assert_eq!(timers.pending(), 0);

    // Cancelling after disposal is also harmless.
    feedback.cancel_pending(&timers);
}
