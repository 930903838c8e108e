use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use navkit::callback::{Callback, callback};
use navkit::controlled::{Controlled, ControlledField, Uncontrollable};
use navkit::prelude::*;

// ============================================================================
// Controlled<T>
// ============================================================================

#[test]
fn test_uncontrolled_starts_at_default() {
    let state = Controlled::new(None, Some(false));

    assert!(!state.is_controlled());
    assert_eq!(state.internal_value(), Some(false));
    assert_eq!(state.effective(None), Some(false));
}

#[test]
fn test_uncontrolled_toggle_parity() {
    let state = Controlled::new(None, Some(false));

    for n in 1..=5 {
        let current = state.effective(None).unwrap();
        state.propose(!current, None);
        assert_eq!(state.effective(None), Some(n % 2 == 1));
        assert_eq!(state.internal_value(), Some(n % 2 == 1));
    }
}

#[test]
fn test_controlled_never_creates_cell() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let calls_clone = Arc::clone(&calls);
    let on_change: Callback<bool> = callback(move |v: bool| calls_clone.lock().unwrap().push(v));

    let state = Controlled::new(Some(false), Some(false));
    assert!(state.is_controlled());
    assert!(state.cell().is_none());

    state.propose(true, Some(&on_change));

    assert_eq!(*calls.lock().unwrap(), vec![true]);
    assert_eq!(state.internal_value(), None);
    assert_eq!(state.effective(Some(false)), Some(false));
    assert_eq!(state.effective(Some(true)), Some(true));
}

#[test]
fn test_uncontrolled_callback_runs_before_cell_update() {
    let state = Arc::new(Controlled::new(None, Some(false)));
    let observed = Arc::new(Mutex::new(None));

    let state_clone = Arc::clone(&state);
    let observed_clone = Arc::clone(&observed);
    let on_change: Callback<bool> = callback(move |_: bool| {
        *observed_clone.lock().unwrap() = state_clone.internal_value();
    });

    state.propose(true, Some(&on_change));

    assert_eq!(*observed.lock().unwrap(), Some(false));
    assert_eq!(state.internal_value(), Some(true));
}

#[test]
fn test_missing_default_leaves_cell_unset() {
    let state: Controlled<bool> = Controlled::new(None, None);
    assert_eq!(state.effective(None), None);

    state.propose(true, None);
    assert_eq!(state.effective(None), Some(true));
}

// Ownership is fixed at construction. These two cases document what happens
// when a caller switches modes after the first render.

#[test]
fn test_controlled_value_dropped_later_renders_default() {
    let state = Controlled::new(Some(true), Some(false));
    assert_eq!(state.effective(None), Some(false));
    assert!(state.is_controlled());
}

#[test]
fn test_uncontrolled_ignores_later_value() {
    let state = Controlled::new(None, Some(false));
    assert_eq!(state.effective(Some(true)), Some(false));
    assert!(!state.is_controlled());
}

// ============================================================================
// Uncontrollable<C, F>
// ============================================================================

#[derive(Clone, Default)]
struct SwitchProps {
    on: Option<bool>,
    on_flip: Option<Callback<bool>>,
}

struct On;

impl ControlledField<SwitchProps> for On {
    type Value = bool;

    const NAME: &'static str = "switch on";

    fn value(props: &SwitchProps) -> Option<bool> {
        props.on
    }

    fn set_value(props: &mut SwitchProps, value: Option<bool>) {
        props.on = value;
    }

    fn handler(props: &SwitchProps) -> Option<Callback<bool>> {
        props.on_flip.clone()
    }

    fn set_handler(props: &mut SwitchProps, handler: Callback<bool>) {
        props.on_flip = Some(handler);
    }

    fn default_value(_props: &SwitchProps) -> Option<bool> {
        Some(false)
    }
}

#[derive(Default)]
struct SwitchView;

impl Component for SwitchView {
    type Props = SwitchProps;

    fn render(&self, props: &SwitchProps, _scope: &Scope<'_>) -> Result<Element> {
        let on = props.on.unwrap_or(false);
        let on_flip = props.on_flip.clone();
        Ok(Element::new("button")
            .class(if on { "on" } else { "off" })
            .on(EventKind::Click, move |_| {
                if let Some(on_flip) = &on_flip {
                    on_flip(!on);
                }
            }))
    }
}

type Switch = Uncontrollable<SwitchView, On>;

#[test]
fn test_adapter_uncontrolled_flips_between_renders() {
    let switch = Switch::default();
    let props = SwitchProps::default();
    let scope = Scope::root();

    let first = switch.render(&props, &scope).unwrap();
    assert!(first.has_class("off"));
    assert!(!switch.needs_render());

    first.fire(EventKind::Click);
    assert!(switch.needs_render());

    let second = switch.render(&props, &scope).unwrap();
    assert!(second.has_class("on"));
    assert!(!switch.needs_render());

    second.fire(EventKind::Click);
    let third = switch.render(&props, &scope).unwrap();
    assert!(third.has_class("off"));
}

#[test]
fn test_adapter_controlled_reports_but_does_not_mutate() {
    let flips = Arc::new(AtomicUsize::new(0));
    let flips_clone = Arc::clone(&flips);

    let switch = Switch::default();
    let props = SwitchProps {
        on: Some(false),
        on_flip: Some(callback(move |_: bool| {
            flips_clone.fetch_add(1, Ordering::SeqCst);
        })),
    };
    let scope = Scope::root();

    let first = switch.render(&props, &scope).unwrap();
    first.fire(EventKind::Click);

    assert_eq!(flips.load(Ordering::SeqCst), 1);
    assert!(switch.controlled().unwrap().is_controlled());
    assert!(switch.controlled().unwrap().cell().is_none());

    let second = switch.render(&props, &scope).unwrap();
    assert!(second.has_class("off"));
}

#[test]
fn test_adapter_uncontrolled_still_notifies_caller() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);

    let switch = Switch::default();
    let props = SwitchProps {
        on: None,
        on_flip: Some(callback(move |v: bool| seen_clone.lock().unwrap().push(v))),
    };
    let scope = Scope::root();

    switch.render(&props, &scope).unwrap().fire(EventKind::Click);
    switch.render(&props, &scope).unwrap().fire(EventKind::Click);

    assert_eq!(*seen.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_adapter_mode_fixed_at_first_render() {
    let switch = Switch::default();
    let scope = Scope::root();

    switch.render(&SwitchProps::default(), &scope).unwrap();
    assert!(!switch.controlled().unwrap().is_controlled());

    let later = SwitchProps {
        on: Some(true),
        on_flip: None,
    };
    let rendered = switch.render(&later, &scope).unwrap();
    assert!(rendered.has_class("off"));
    assert!(!switch.controlled().unwrap().is_controlled());
}
