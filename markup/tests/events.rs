use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use markup::{Element, Event, EventKind};

#[test]
fn test_fire_invokes_listener_with_target() {
    let seen = Arc::new(Mutex::new(None));
    let seen_clone = Arc::clone(&seen);

    let el = Element::new("input")
        .id("opt")
        .on(EventKind::Focus, move |event| {
            *seen_clone.lock().unwrap() = Some(event.clone());
        });

    assert!(el.fire(EventKind::Focus));

    let event = seen.lock().unwrap().clone().unwrap();
    assert_eq!(event.kind, EventKind::Focus);
    assert_eq!(event.target_id.as_deref(), Some("opt"));
    assert!(event.targets_tag("INPUT"));
}

#[test]
fn test_fire_without_listener_returns_false() {
    let el = Element::div();
    assert!(!el.fire(EventKind::Click));
}

#[test]
fn test_listener_survives_clone() {
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = Arc::clone(&count);

    let el = Element::new("button").on(EventKind::Click, move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });
    let copy = el.clone();

    el.fire(EventKind::Click);
    copy.dispatch(&Event::click("button"));

    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_change_event_carries_checked_state() {
    let event = Event::new(EventKind::Change, "input").checked(true);
    assert_eq!(event.checked, Some(true));
}
