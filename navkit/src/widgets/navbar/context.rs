use std::fmt;
use std::sync::Arc;

use markup::Event;

use crate::callback::{Action, SelectHandler};
use crate::styling::prefix;

/// State a navbar publishes to its descendants.
///
/// Rebuilt on every render of the navbar, so descendants always see the
/// current `expanded` value and fresh callbacks.
#[derive(Clone)]
pub struct NavbarContext {
    /// Base class used for prefixing descendant classes.
    pub bs_class: String,
    /// Effective expanded state.
    pub expanded: bool,
    /// Flip the expanded state.
    ///
    /// Proposes the opposite of `expanded` as seen by this render, so firing
    /// it twice before re-rendering proposes the same value twice. Hosts
    /// re-render whenever [`Navbar::needs_render`](crate::controlled::Uncontrollable::needs_render)
    /// reports a change.
    pub on_toggle: Action,
    /// Selection handler for selectable descendants.
    pub on_select: Option<SelectHandler>,
}

impl NavbarContext {
    /// Bundle used by sub-widgets rendered outside any navbar.
    pub fn fallback() -> Self {
        Self {
            bs_class: "navbar".to_string(),
            expanded: false,
            on_toggle: Arc::new(|| {}),
            on_select: None,
        }
    }

    /// `"<bs_class>-<suffix>"`.
    pub fn prefix(&self, suffix: &str) -> String {
        prefix(&self.bs_class, suffix)
    }

    pub fn toggle(&self) {
        (self.on_toggle)();
    }

    /// Report a selection. Returns `false` if nothing is listening.
    pub fn select(&self, event_key: &str, event: &Event) -> bool {
        match &self.on_select {
            Some(on_select) => {
                on_select(event_key, event);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for NavbarContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavbarContext")
            .field("bs_class", &self.bs_class)
            .field("expanded", &self.expanded)
            .field("on_select", &self.on_select.is_some())
            .finish_non_exhaustive()
    }
}
