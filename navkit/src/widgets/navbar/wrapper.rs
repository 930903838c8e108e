use std::collections::BTreeMap;

use markup::{AttrValue, Element};

use super::NavbarContext;
use crate::context::Scope;
use crate::error::Result;
use crate::node::{Node, Render, render_children};

/// Plain navbar slots that only add a prefixed class: form, text and link.
///
/// | constructor | default tag | class         |
/// |-------------|-------------|---------------|
/// | `form()`    | `div`       | `navbar-form` |
/// | `text()`    | `p`         | `navbar-text` |
/// | `link()`    | `a`         | `navbar-link` |
///
/// `pull_right`/`pull_left` add `navbar-right`/`navbar-left`.
#[derive(Debug, Clone)]
pub struct NavbarWrapper {
    suffix: &'static str,
    component_class: String,
    pull_right: bool,
    pull_left: bool,
    class_name: Option<String>,
    attrs: BTreeMap<String, AttrValue>,
    children: Vec<Node>,
}

impl NavbarWrapper {
    fn new(tag: &str, suffix: &'static str) -> Self {
        Self {
            suffix,
            component_class: tag.to_string(),
            pull_right: false,
            pull_left: false,
            class_name: None,
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn form() -> Self {
        Self::new("div", "form")
    }

    pub fn text() -> Self {
        Self::new("p", "text")
    }

    pub fn link() -> Self {
        Self::new("a", "link")
    }

    pub fn component_class(mut self, tag: impl Into<String>) -> Self {
        self.component_class = tag.into();
        self
    }

    pub fn pull_right(mut self, on: bool) -> Self {
        self.pull_right = on;
        self
    }

    pub fn pull_left(mut self, on: bool) -> Self {
        self.pull_left = on;
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
}

impl Render for NavbarWrapper {
    fn render(&self, scope: &Scope<'_>) -> Result<Element> {
        let fallback = NavbarContext::fallback();
        let navbar = scope.consume_or(&fallback);

        let mut element = Element::new(self.component_class.as_str()).attrs(self.attrs.clone());
        if let Some(class_name) = &self.class_name {
            element = element.class(class_name.as_str());
        }
        element = element.class(navbar.prefix(self.suffix));
        if self.pull_right {
            element = element.class(navbar.prefix("right"));
        }
        if self.pull_left {
            element = element.class(navbar.prefix("left"));
        }
        Ok(element.children(render_children(&self.children, scope)?))
    }
}
