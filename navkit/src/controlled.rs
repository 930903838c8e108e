//! Controlled/uncontrolled ownership of a component value.
//!
//! A value such as a navbar's `expanded` flag can be owned in one of two ways:
//!
//! - **Uncontrolled**: the component keeps its own cell, seeded once from a
//!   default, and updates it whenever the value changes.
//! - **Controlled**: the caller supplies the value on every render and is
//!   told about proposed changes through a callback. The component never
//!   writes the value itself.
//!
//! The mode is chosen once, from whether the value was supplied on the first
//! render, and never changes for the lifetime of the instance. Supplying or
//! dropping the value later is a caller error: the initial mode is kept and
//! a warning is logged.
//!
//! [`Uncontrollable`] applies this to any [`Component`] whose properties
//! contain a value/callback pair described by a [`ControlledField`].

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use markup::Element;

use crate::callback::Callback;
use crate::context::Scope;
use crate::error::Result;
use crate::node::Component;
use crate::state::State;

/// Who owns the value.
#[derive(Debug, Clone)]
pub enum Ownership<T> {
    /// The component owns this cell.
    Internal(State<Option<T>>),
    /// The caller owns the value.
    External,
}

/// A value with ownership fixed at construction.
#[derive(Debug)]
pub struct Controlled<T> {
    ownership: Ownership<T>,
    default: Option<T>,
    misuse_reported: AtomicBool,
}

impl<T: Clone> Controlled<T> {
    /// Decide ownership from the first supplied value.
    ///
    /// With no initial value the instance is uncontrolled and its cell starts
    /// at `default`. A `None` default leaves the cell unset until the first
    /// change; components should always declare one.
    pub fn new(initial: Option<T>, default: Option<T>) -> Self {
        let ownership = match initial {
            Some(_) => Ownership::External,
            None => Ownership::Internal(State::new(default.clone())),
        };
        Self {
            ownership,
            default,
            misuse_reported: AtomicBool::new(false),
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.ownership, Ownership::External)
    }

    pub fn ownership(&self) -> &Ownership<T> {
        &self.ownership
    }

    /// The internal cell, `None` for controlled instances.
    pub fn cell(&self) -> Option<&State<Option<T>>> {
        match &self.ownership {
            Ownership::Internal(cell) => Some(cell),
            Ownership::External => None,
        }
    }

    /// Current value of the internal cell, `None` if controlled or unset.
    pub fn internal_value(&self) -> Option<T> {
        self.cell().and_then(State::get)
    }

    /// The value to render with, given this render's supplied value.
    pub fn effective(&self, supplied: Option<T>) -> Option<T> {
        match (&self.ownership, supplied) {
            (Ownership::External, Some(value)) => Some(value),
            (Ownership::External, None) => {
                self.report_misuse("controlled value was dropped; rendering the default");
                self.default.clone()
            }
            (Ownership::Internal(cell), supplied) => {
                if supplied.is_some() {
                    self.report_misuse("value supplied to an uncontrolled instance is ignored");
                }
                cell.get().or_else(|| self.default.clone())
            }
        }
    }

    /// Handle a proposed change.
    ///
    /// The caller's callback always runs first. An uncontrolled instance then
    /// stores the value for its next render; a controlled one leaves it to
    /// the caller.
    pub fn propose(&self, value: T, callback: Option<&Callback<T>>) {
        if let Some(callback) = callback {
            callback(value.clone());
        }
        if let Ownership::Internal(cell) = &self.ownership {
            cell.set(Some(value));
        }
    }

    fn report_misuse(&self, message: &str) {
        if !self.misuse_reported.swap(true, Ordering::Relaxed) {
            log::warn!("{message} (ownership is fixed at first render)");
        }
    }
}

/// Describes a value/callback pair inside a props type.
pub trait ControlledField<P>: Send + Sync + 'static {
    type Value: Clone + Send + Sync + 'static;

    /// Field name, for diagnostics.
    const NAME: &'static str;

    fn value(props: &P) -> Option<Self::Value>;
    fn set_value(props: &mut P, value: Option<Self::Value>);
    fn handler(props: &P) -> Option<Callback<Self::Value>>;
    fn set_handler(props: &mut P, handler: Callback<Self::Value>);

    /// Seed for the uncontrolled cell.
    fn default_value(props: &P) -> Option<Self::Value>;
}

/// Wraps a component so that one of its values may be controlled or not.
///
/// The wrapper accepts the same properties as the inner component. On every
/// render it passes the inner component the effective value and a callback
/// that reports changes to the caller's callback and, when uncontrolled,
/// updates the internal cell.
pub struct Uncontrollable<C, F>
where
    C: Component,
    F: ControlledField<C::Props>,
{
    inner: C,
    state: OnceLock<Arc<Controlled<F::Value>>>,
    _field: PhantomData<fn() -> F>,
}

impl<C, F> Uncontrollable<C, F>
where
    C: Component,
    F: ControlledField<C::Props>,
{
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            state: OnceLock::new(),
            _field: PhantomData,
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Ownership state, available after the first render.
    pub fn controlled(&self) -> Option<&Controlled<F::Value>> {
        self.state.get().map(Arc::as_ref)
    }

    /// Check whether the internal cell changed since the last render.
    pub fn needs_render(&self) -> bool {
        self.controlled()
            .and_then(Controlled::cell)
            .is_some_and(State::is_dirty)
    }
}

impl<C, F> Default for Uncontrollable<C, F>
where
    C: Component + Default,
    F: ControlledField<C::Props>,
{
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C, F> Component for Uncontrollable<C, F>
where
    C: Component,
    F: ControlledField<C::Props>,
{
    type Props = C::Props;

    fn render(&self, props: &Self::Props, scope: &Scope<'_>) -> Result<Element> {
        let state = self.state.get_or_init(|| {
            let state = Controlled::new(F::value(props), F::default_value(props));
            log::debug!(
                "{} is {}",
                F::NAME,
                if state.is_controlled() { "controlled" } else { "uncontrolled" }
            );
            Arc::new(state)
        });

        if let Some(cell) = state.cell() {
            cell.clear_dirty();
        }

        let mut effective = props.clone();
        F::set_value(&mut effective, state.effective(F::value(props)));

        let external = F::handler(props);
        let state = Arc::clone(state);
        F::set_handler(
            &mut effective,
            Arc::new(move |value: F::Value| state.propose(value, external.as_ref())),
        );

        self.inner.render(&effective, scope)
    }
}
