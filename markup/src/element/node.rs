use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::Content;
use crate::event::{Event, Listener};
use crate::types::{AttrValue, EventKind};

/// Tag used for bare text nodes.
const TEXT_TAG: &str = "";

#[derive(Clone)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,

    // Presentation
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, AttrValue>,

    // Content
    pub content: Content,

    // Interaction
    pub listeners: BTreeMap<EventKind, Listener>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            content: Content::None,
            listeners: BTreeMap::new(),
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("id", &self.id)
            .field("classes", &self.classes)
            .field("attrs", &self.attrs)
            .field("content", &self.content)
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Create a bare text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: TEXT_TAG.to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Classes
    /// Add a class. Empty names and duplicates are ignored.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.push_class(class.into());
        self
    }

    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            self.push_class(class.into());
        }
        self
    }

    fn push_class(&mut self, class: String) {
        for name in class.split_whitespace() {
            if !self.classes.iter().any(|c| c == name) {
                self.classes.push(name.to_string());
            }
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Space-separated class attribute value.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    // Attributes
    /// Set an attribute. `class` and `id` go to their dedicated fields, so
    /// they are never written twice.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name.into(), value.into());
        self
    }

    /// Set a boolean attribute such as `checked` or `disabled`.
    pub fn flag(self, name: impl Into<String>, on: bool) -> Self {
        self.attr(name, on)
    }

    /// Merge a set of attributes, overwriting existing keys.
    pub fn attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        for (name, value) in attrs {
            self.set_attr(name.into(), value.into());
        }
        self
    }

    fn set_attr(&mut self, name: String, value: AttrValue) {
        if name != "class" && name != "id" {
            self.attrs.insert(name, value);
            return;
        }
        if let AttrValue::Text(text) = value {
            if name == "class" {
                self.push_class(text);
            } else {
                self.id = Some(text);
            }
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn text_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(AttrValue::as_text)
    }

    /// Check a boolean attribute. Missing attributes read as `false`.
    pub fn has_flag(&self, name: &str) -> bool {
        self.attrs
            .get(name)
            .and_then(AttrValue::as_flag)
            .unwrap_or(false)
    }

    // Content
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        for child in children {
            self = self.child(child);
        }
        self
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(s) => s.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }

    // Interaction
    pub fn on<F>(mut self, kind: EventKind, listener: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.listeners.insert(kind, Arc::new(listener));
        self
    }

    pub fn has_listener(&self, kind: EventKind) -> bool {
        self.listeners.contains_key(&kind)
    }

    /// Deliver an event to this element's listener.
    ///
    /// Returns `false` when no listener is attached for the event kind.
    pub fn dispatch(&self, event: &Event) -> bool {
        match self.listeners.get(&event.kind) {
            Some(listener) => {
                log::trace!("dispatching {} to <{}>", event.kind, self.tag);
                listener(event);
                true
            }
            None => false,
        }
    }

    /// Build an event originating from this element and dispatch it.
    pub fn fire(&self, kind: EventKind) -> bool {
        let mut event = Event::new(kind, self.tag.clone());
        event.target_id = self.id.clone();
        self.dispatch(&event)
    }
}
