//! A checkbox or radio input dressed as a button.
//!
//! `ToggleButton` keeps no state of its own: `checked`, `disabled` and
//! `focused` are supplied on every render, typically by the group that
//! embeds it. Focus changes on the inner input are reported upward through
//! `toggle_focus`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use markup::{AttrValue, Element, Event, EventKind, Listener};

use crate::callback::Callback;
use crate::context::Scope;
use crate::error::{Error, Result};
use crate::node::{Node, Render};
use crate::state::State;
use crate::styling::StyleVariant;
use crate::widgets::Button;

static NEXT_INPUT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_input_id() -> String {
    let id = NEXT_INPUT_ID.fetch_add(1, Ordering::Relaxed);
    format!("toggle-input-{id}")
}

/// The kind of native input behind the button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Checkbox,
    Radio,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }
}

/// Handle that learns the id of the rendered input element.
#[derive(Debug, Clone, Default)]
pub struct InputRef(State<Option<String>>);

impl InputRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the input from the most recent render.
    pub fn id(&self) -> Option<String> {
        self.0.get()
    }
}

/// A labeled toggle wrapping a hidden checkbox or radio input.
#[derive(Clone, Default)]
pub struct ToggleButton {
    input_type: InputType,
    name: Option<String>,
    value: Option<String>,
    checked: bool,
    disabled: bool,
    focused: bool,
    variant: Option<StyleVariant>,
    on_change: Option<Listener>,
    toggle_focus: Option<Callback<bool>>,
    input_ref: Option<InputRef>,
    class_name: Option<String>,
    attrs: BTreeMap<String, AttrValue>,
    children: Vec<Node>,
}

impl ToggleButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The input's value. Required.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn variant(mut self, variant: impl Into<StyleVariant>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    pub fn toggle_focus<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.toggle_focus = Some(Arc::new(f));
        self
    }

    pub fn input_ref(mut self, input_ref: &InputRef) -> Self {
        self.input_ref = Some(input_ref.clone());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    fn focus_listener(&self, focused: bool) -> impl Fn(&Event) + Send + Sync + 'static {
        let toggle_focus = self.toggle_focus.clone();
        move |event: &Event| {
            if event.targets_tag("input")
                && let Some(toggle_focus) = &toggle_focus
            {
                toggle_focus(focused);
            }
        }
    }

    fn input(&self, value: &str) -> Element {
        let mut input = Element::new("input")
            .attr("type", self.input_type.as_str())
            .attr("value", value)
            .attr("autocomplete", "off")
            .flag("checked", self.checked)
            .flag("disabled", self.disabled);

        if let Some(name) = &self.name {
            input = input.attr("name", name.as_str());
        }
        if let Some(input_ref) = &self.input_ref {
            let id = input_ref.id().unwrap_or_else(generate_input_id);
            input_ref.0.set(Some(id.clone()));
            input = input.id(id);
        }

        let on_change = self.on_change.clone();
        input
            .on(EventKind::Focus, self.focus_listener(true))
            .on(EventKind::Blur, self.focus_listener(false))
            .on(EventKind::Change, move |event| {
                if let Some(on_change) = &on_change {
                    on_change(event);
                }
            })
    }
}

impl fmt::Debug for ToggleButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleButton")
            .field("input_type", &self.input_type)
            .field("name", &self.name)
            .field("value", &self.value)
            .field("checked", &self.checked)
            .field("disabled", &self.disabled)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl Render for ToggleButton {
    fn render(&self, scope: &Scope<'_>) -> Result<Element> {
        let value = self.value.as_deref().ok_or(Error::MissingRequiredValue {
            component: "ToggleButton",
            prop: "value",
        })?;

        let mut button = Button::new()
            .variant_opt(self.variant.clone())
            .active(self.checked)
            .as_tag("label")
            .attrs(self.attrs.clone());

        let mut extra = Vec::new();
        if let Some(class_name) = &self.class_name {
            extra.push(class_name.clone());
        }
        if self.focused {
            extra.push("focus".to_string());
        }
        if self.disabled {
            extra.push("disabled".to_string());
        }
        if !extra.is_empty() {
            button = button.class_name(extra.join(" "));
        }

        button
            .child(self.input(value))
            .children(self.children.iter().cloned())
            .render(scope)
    }
}
