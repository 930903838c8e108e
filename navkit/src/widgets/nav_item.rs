//! A selectable navigation entry.

use std::sync::Arc;

use markup::{Element, Event, EventKind};

use super::NavbarContext;
use crate::callback::{SelectHandler, chain_select};
use crate::context::Scope;
use crate::error::Result;
use crate::node::{Node, Render, render_children};

/// `<li role="presentation"><a role="button">…</a></li>`.
///
/// Clicking the anchor reports `(event_key, event)` to the item's own
/// `on_select` and then to the enclosing navbar, unless the item is disabled.
#[derive(Clone, Default)]
pub struct NavItem {
    event_key: String,
    href: Option<String>,
    active: bool,
    disabled: bool,
    on_select: Option<SelectHandler>,
    children: Vec<Node>,
}

impl NavItem {
    pub fn new(event_key: impl Into<String>) -> Self {
        Self {
            event_key: event_key.into(),
            ..Default::default()
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
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

    pub fn on_select<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &Event) + Send + Sync + 'static,
    {
        self.on_select = Some(Arc::new(f));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl std::fmt::Debug for NavItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavItem")
            .field("event_key", &self.event_key)
            .field("active", &self.active)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl Render for NavItem {
    fn render(&self, scope: &Scope<'_>) -> Result<Element> {
        let navbar_select = scope
            .consume::<NavbarContext>()
            .and_then(|navbar| navbar.on_select.clone());
        let on_select = chain_select(self.on_select.clone(), navbar_select);

        let mut anchor = Element::new("a")
            .attr("role", "button")
            .attr("href", self.href.as_deref().unwrap_or("#"));

        if !self.disabled
            && let Some(on_select) = on_select
        {
            let event_key = self.event_key.clone();
            anchor = anchor.on(EventKind::Click, move |event| {
                log::debug!("nav item '{event_key}' selected");
                on_select(&event_key, event);
            });
        }

        let mut item = Element::new("li").attr("role", "presentation");
        if self.active {
            item = item.class("active");
        }
        if self.disabled {
            item = item.class("disabled");
        }
        Ok(item.child(anchor.children(render_children(&self.children, scope)?)))
    }
}
