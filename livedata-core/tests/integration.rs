//! Integration Tests for the Observable Holder
//!
//! These tests exercise the full view-model / view flow: a view-model owns
//! the holders and posts values; a view observes them through a component
//! scope for the duration of its mount interval.

use std::sync::Arc;

use parking_lot::Mutex;

use livedata_core::{ComponentScope, LiveData};

/// A view-model owning a single observable string.
struct ViewModel {
    name: LiveData<String>,
}

impl ViewModel {
    fn new() -> Self {
        Self {
            name: LiveData::new(),
        }
    }

    fn do_something_in_background(&self, value: &str) {
        self.name.post_value(value.to_string());
    }
}

/// Post before mount, observe at mount: the view sees the value through
/// late-subscription replay, and unmount detaches it.
#[test]
fn single_observer_replay_and_auto_remove() {
    let expected = "some value";
    let view_model = ViewModel::new();

    // Value posted before the view exists
    view_model.do_something_in_background(expected);

    // Mount the view
    let rendered = Arc::new(Mutex::new(String::new()));
    let scope = ComponentScope::mount();
    let rendered_clone = rendered.clone();
    scope.observe(&view_model.name, move |value: &String| {
        *rendered_clone.lock() = value.clone();
    });

    // Replay delivered the value at observe time
    assert_eq!(*rendered.lock(), expected);
    assert_eq!(view_model.name.observer_count(), 1);

    scope.unmount();
    assert_eq!(view_model.name.observer_count(), 0);
}

/// Observe at mount, post afterwards: the view sees the broadcast.
#[test]
fn single_observer_observe_before_post() {
    let expected = "some value";
    let view_model = ViewModel::new();

    let rendered = Arc::new(Mutex::new(String::new()));
    let scope = ComponentScope::mount();
    let rendered_clone = rendered.clone();
    scope.observe(&view_model.name, move |value: &String| {
        *rendered_clone.lock() = value.clone();
    });

    // Nothing to replay yet
    assert_eq!(*rendered.lock(), "");

    view_model.do_something_in_background(expected);
    assert_eq!(*rendered.lock(), expected);
    assert_eq!(view_model.name.observer_count(), 1);

    scope.unmount();
    assert_eq!(view_model.name.observer_count(), 0);
}

/// Two holders of different value types observed from one component;
/// neither receives the other's values, and unmount detaches both.
#[test]
fn multiple_observers_observe_and_auto_remove() {
    struct TwoFieldViewModel {
        title: LiveData<String>,
        count: LiveData<i32>,
    }

    let view_model = TwoFieldViewModel {
        title: LiveData::new(),
        count: LiveData::new(),
    };

    let title = Arc::new(Mutex::new(String::new()));
    let count = Arc::new(Mutex::new(0));

    let scope = ComponentScope::mount();
    let title_clone = title.clone();
    scope.observe(&view_model.title, move |value: &String| {
        *title_clone.lock() = value.clone();
    });
    let count_clone = count.clone();
    scope.observe(&view_model.count, move |value: &i32| {
        *count_clone.lock() = *value;
    });

    view_model.title.post_value("some value".to_string());
    view_model.count.post_value(42);

    assert_eq!(*title.lock(), "some value");
    assert_eq!(*count.lock(), 42);

    assert_eq!(view_model.title.observer_count(), 1);
    assert_eq!(view_model.count.observer_count(), 1);

    scope.unmount();

    assert_eq!(view_model.title.observer_count(), 0);
    assert_eq!(view_model.count.observer_count(), 0);
}

/// The full contract in one pass: observe, broadcast once, dispose,
/// broadcast again silently.
#[test]
fn observe_broadcast_dispose_silence() {
    let holder: LiveData<String> = LiveData::new();

    let received = Arc::new(Mutex::new(Vec::new()));
    let received_clone = received.clone();
    let subscription = holder.observe(move |value: &String| {
        received_clone.lock().push(value.clone());
    });

    assert_eq!(holder.observer_count(), 1);

    holder.post_value("x".to_string());
    assert_eq!(*received.lock(), vec!["x".to_string()]);

    subscription.dispose();
    assert_eq!(holder.observer_count(), 0);

    holder.post_value("y".to_string());
    // Not invoked again after disposal
    assert_eq!(*received.lock(), vec!["x".to_string()]);
}

/// Two independent holders never cross-talk.
#[test]
fn independent_holders_do_not_cross_talk() {
    let words: LiveData<String> = LiveData::new();
    let numbers: LiveData<i32> = LiveData::new();

    let word_log = Arc::new(Mutex::new(Vec::new()));
    let number_log = Arc::new(Mutex::new(Vec::new()));

    let word_clone = word_log.clone();
    let _sub_a = words.observe(move |value: &String| {
        word_clone.lock().push(value.clone());
    });
    let number_clone = number_log.clone();
    let _sub_b = numbers.observe(move |value: &i32| {
        number_clone.lock().push(*value);
    });

    words.post_value("a".to_string());
    numbers.post_value(7);

    assert_eq!(*word_log.lock(), vec!["a".to_string()]);
    assert_eq!(*number_log.lock(), vec![7]);
}

/// Remounting a component opens a fresh scope; the old scope's observers
/// stay detached and the new one replays the current value.
#[test]
fn remount_gets_fresh_subscription_with_replay() {
    let view_model = ViewModel::new();
    view_model.do_something_in_background("first");

    let first_render = Arc::new(Mutex::new(String::new()));
    let scope = ComponentScope::mount();
    let first_clone = first_render.clone();
    scope.observe(&view_model.name, move |value: &String| {
        *first_clone.lock() = value.clone();
    });
    assert_eq!(*first_render.lock(), "first");

    scope.unmount();
    view_model.do_something_in_background("second");
    // First instance is silent after unmount
    assert_eq!(*first_render.lock(), "first");

    let second_render = Arc::new(Mutex::new(String::new()));
    let remounted = ComponentScope::mount();
    let second_clone = second_render.clone();
    remounted.observe(&view_model.name, move |value: &String| {
        *second_clone.lock() = value.clone();
    });
    // Replay of the latest value at remount
    assert_eq!(*second_render.lock(), "second");
    assert_eq!(view_model.name.observer_count(), 1);
}
