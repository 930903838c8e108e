//! Sub-widgets that read the enclosing navbar's context.

use std::collections::BTreeMap;
use std::sync::Arc;

use markup::{AttrValue, Element, EventKind};

use super::NavbarContext;
use crate::context::Scope;
use crate::error::Result;
use crate::node::{Node, Render, render_children};

/// The brand slot: `<span class="navbar-brand">`.
///
/// If its only child renders to an element, that element receives the brand
/// class instead of being wrapped, so `NavbarBrand::new().child(link)`
/// produces `<a class="navbar-brand">`.
#[derive(Debug, Clone, Default)]
pub struct NavbarBrand {
    class_name: Option<String>,
    attrs: BTreeMap<String, AttrValue>,
    children: Vec<Node>,
}

impl NavbarBrand {
    pub fn new() -> Self {
        Self::default()
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

impl Render for NavbarBrand {
    fn render(&self, scope: &Scope<'_>) -> Result<Element> {
        let fallback = NavbarContext::fallback();
        let navbar = scope.consume_or(&fallback);
        let brand_class = navbar.prefix("brand");

        let mut children = render_children(&self.children, scope)?;
        if children.len() == 1 && !children[0].is_text() {
            let mut only = children.remove(0);
            if let Some(class_name) = &self.class_name {
                only = only.class(class_name.as_str());
            }
            return Ok(only.class(brand_class));
        }

        let mut element = Element::span().attrs(self.attrs.clone());
        if let Some(class_name) = &self.class_name {
            element = element.class(class_name.as_str());
        }
        Ok(element.class(brand_class).children(children))
    }
}

/// The header row: `<div class="navbar-header">`.
#[derive(Debug, Clone, Default)]
pub struct NavbarHeader {
    class_name: Option<String>,
    attrs: BTreeMap<String, AttrValue>,
    children: Vec<Node>,
}

impl NavbarHeader {
    pub fn new() -> Self {
        Self::default()
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

impl Render for NavbarHeader {
    fn render(&self, scope: &Scope<'_>) -> Result<Element> {
        let fallback = NavbarContext::fallback();
        let navbar = scope.consume_or(&fallback);

        let mut element = Element::div().attrs(self.attrs.clone());
        if let Some(class_name) = &self.class_name {
            element = element.class(class_name.as_str());
        }
        Ok(element
            .class(navbar.prefix("header"))
            .children(render_children(&self.children, scope)?))
    }
}

/// The expand/collapse button.
///
/// Carries `collapsed` while the navbar is collapsed. A click runs the
/// caller's `on_click` first and then asks the navbar to toggle. Without
/// children it renders the usual screen-reader label and three icon bars.
#[derive(Clone, Default)]
pub struct NavbarToggle {
    class_name: Option<String>,
    attrs: BTreeMap<String, AttrValue>,
    on_click: Option<Arc<dyn Fn() + Send + Sync>>,
    children: Vec<Node>,
}

impl NavbarToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn on_click<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(f));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    fn default_content() -> Vec<Element> {
        vec![
            Element::span()
                .class("sr-only")
                .child(Element::text("Toggle navigation")),
            Element::span().class("icon-bar"),
            Element::span().class("icon-bar"),
            Element::span().class("icon-bar"),
        ]
    }
}

impl std::fmt::Debug for NavbarToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavbarToggle")
            .field("class_name", &self.class_name)
            .field("attrs", &self.attrs)
            .field("on_click", &self.on_click.is_some())
            .field("children", &self.children)
            .finish()
    }
}

impl Render for NavbarToggle {
    fn render(&self, scope: &Scope<'_>) -> Result<Element> {
        let fallback = NavbarContext::fallback();
        let navbar = scope.consume_or(&fallback);

        let children = if self.children.is_empty() {
            Self::default_content()
        } else {
            render_children(&self.children, scope)?
        };

        let on_click = self.on_click.clone();
        let on_toggle = Arc::clone(&navbar.on_toggle);

        let mut element = Element::new("button")
            .attrs(self.attrs.clone())
            .attr("type", "button");
        if let Some(class_name) = &self.class_name {
            element = element.class(class_name.as_str());
        }
        element = element.class(navbar.prefix("toggle"));
        if !navbar.expanded {
            element = element.class("collapsed");
        }

        Ok(element
            .on(EventKind::Click, move |_| {
                if let Some(on_click) = &on_click {
                    on_click();
                }
                on_toggle();
            })
            .children(children))
    }
}

/// The collapsible body: `<div class="navbar-collapse collapse">`, plus `in`
/// while the navbar is expanded.
#[derive(Debug, Clone, Default)]
pub struct NavbarCollapse {
    class_name: Option<String>,
    attrs: BTreeMap<String, AttrValue>,
    children: Vec<Node>,
}

impl NavbarCollapse {
    pub fn new() -> Self {
        Self::default()
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

impl Render for NavbarCollapse {
    fn render(&self, scope: &Scope<'_>) -> Result<Element> {
        let fallback = NavbarContext::fallback();
        let navbar = scope.consume_or(&fallback);

        let mut element = Element::div().attrs(self.attrs.clone());
        if let Some(class_name) = &self.class_name {
            element = element.class(class_name.as_str());
        }
        element = element.class(navbar.prefix("collapse")).class("collapse");
        if navbar.expanded {
            element = element.class("in");
        }
        Ok(element.children(render_children(&self.children, scope)?))
    }
}
