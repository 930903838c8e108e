//! The `btn` primitive.

use std::collections::BTreeMap;

use markup::{AttrValue, Element};

use crate::context::Scope;
use crate::error::Result;
use crate::node::{Node, Render, render_children};
use crate::styling::{BsProps, StyleRegistration, StyleVariant};

inventory::submit! {
    StyleRegistration::new(
        "btn",
        &["default", "primary", "success", "info", "warning", "danger", "link"],
        "default",
    )
}

/// A styled button.
///
/// Rendered as a `<button>` by default. With [`as_tag`](Self::as_tag) it can
/// render as another element (e.g. `label` or `a`); such elements get no
/// `type` attribute and show the disabled state as a class instead.
///
/// # Example
///
/// ```ignore
/// let save = Button::new()
///     .variant(StyleVariant::PRIMARY)
///     .child("Save");
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    variant: Option<StyleVariant>,
    active: bool,
    disabled: bool,
    block: bool,
    as_tag: Option<String>,
    button_type: String,
    class_name: Option<String>,
    attrs: BTreeMap<String, AttrValue>,
    children: Vec<Node>,
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Button {
    pub fn new() -> Self {
        Self {
            variant: None,
            active: false,
            disabled: false,
            block: false,
            as_tag: None,
            button_type: "button".to_string(),
            class_name: None,
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn variant(mut self, variant: impl Into<StyleVariant>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn variant_opt(mut self, variant: Option<StyleVariant>) -> Self {
        self.variant = variant;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn block(mut self, block: bool) -> Self {
        self.block = block;
        self
    }

    /// Render as a different element.
    pub fn as_tag(mut self, tag: impl Into<String>) -> Self {
        self.as_tag = Some(tag.into());
        self
    }

    /// The `type` attribute for `<button>` elements.
    pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
        self.button_type = button_type.into();
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

    pub fn attrs(mut self, attrs: BTreeMap<String, AttrValue>) -> Self {
        self.attrs.extend(attrs);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }
}

impl Render for Button {
    fn render(&self, scope: &Scope<'_>) -> Result<Element> {
        let bs = BsProps::new("btn").style(self.variant.clone());
        let mut classes = bs.class_set([("block", self.block)])?;
        classes.insert("active", self.active);

        let tag = self.as_tag.as_deref().unwrap_or("button");
        let mut element = Element::new(tag).attrs(self.attrs.clone());
        if let Some(class_name) = &self.class_name {
            element = element.class(class_name.as_str());
        }
        element = element.classes(classes.enabled());

        if element.tag == "button" {
            element = element
                .attr("type", self.button_type.as_str())
                .flag("disabled", self.disabled);
        } else if self.disabled {
            element = element.class("disabled");
        }

        Ok(element.children(render_children(&self.children, scope)?))
    }
}
