use std::sync::Arc;

use crate::types::EventKind;

/// Callback attached to an element for one [`EventKind`].
pub type Listener = Arc<dyn Fn(&Event) + Send + Sync>;

/// An event delivered to an element listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// Id of the element the event originated from, if it has one.
    pub target_id: Option<String>,
    /// Tag name of the originating element (lowercase).
    pub target_tag: String,
    /// New checked state for `Change` events on checkable inputs.
    pub checked: Option<bool>,
}

impl Event {
    pub fn new(kind: EventKind, target_tag: impl Into<String>) -> Self {
        Self {
            kind,
            target_id: None,
            target_tag: target_tag.into(),
            checked: None,
        }
    }

    pub fn click(target_tag: impl Into<String>) -> Self {
        Self::new(EventKind::Click, target_tag)
    }

    pub fn target_id(mut self, id: impl Into<String>) -> Self {
        self.target_id = Some(id.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Check whether the event originated from an element with the given tag.
    pub fn targets_tag(&self, tag: &str) -> bool {
        self.target_tag.eq_ignore_ascii_case(tag)
    }
}
