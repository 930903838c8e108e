//! Callback types shared between components and their descendants.

use std::sync::Arc;

use markup::Event;

/// A value-carrying notification, e.g. `on_toggle(expanded)`.
pub type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Argument-less action, e.g. the navbar's "toggle me".
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// Selection notification: `(event_key, event)`.
pub type SelectHandler = Arc<dyn Fn(&str, &Event) + Send + Sync>;

/// Wrap a closure as a [`Callback`].
pub fn callback<T, F>(f: F) -> Callback<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Compose two optional selection handlers into one that calls both in order.
///
/// Missing halves are skipped; if both are missing the result is `None`.
pub fn chain_select(
    first: Option<SelectHandler>,
    second: Option<SelectHandler>,
) -> Option<SelectHandler> {
    match (first, second) {
        (Some(a), Some(b)) => Some(Arc::new(move |key: &str, event: &Event| {
            a(key, event);
            b(key, event);
        })),
        (a, b) => a.or(b),
    }
}
