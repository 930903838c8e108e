//! Navigation bar and its sub-widgets.
//!
//! [`Navbar`] publishes a [`NavbarContext`] to everything rendered inside it.
//! Sub-widgets read that bundle to prefix their classes with the navbar's
//! base class, to show the expanded state, and to request a toggle or report
//! a selection. None of this has to be passed to them explicitly.
//!
//! The expanded state is controllable: render with
//! [`NavbarProps::expanded`] on the first render and the caller owns it
//! (changes arrive through [`NavbarProps::on_toggle`]); leave it out and the
//! navbar keeps it internally.
//!
//! # Example
//!
//! ```ignore
//! let navbar = Arc::new(Navbar::default());
//! let props = NavbarProps::new()
//!     .inverse(true)
//!     .fixed_top(true)
//!     .child(Node::tree(Element::div(), [
//!         Node::component(NavbarHeader::new()
//!             .child(Node::component(NavbarBrand::new().child("Home")))
//!             .child(Node::component(NavbarToggle::new()))),
//!         Node::component(NavbarCollapse::new().child(links)),
//!     ]));
//! let html = markup::to_html(&navbar.render(&props, &Scope::root())?);
//! ```

mod context;
mod parts;
mod wrapper;

use std::collections::BTreeMap;
use std::sync::Arc;

use markup::{AttrValue, Element, Event};

pub use context::NavbarContext;
pub use parts::{NavbarBrand, NavbarCollapse, NavbarHeader, NavbarToggle};
pub use wrapper::NavbarWrapper;

use super::Grid;
use crate::callback::{Action, Callback, SelectHandler, chain_select};
use crate::config::{NavkitConfig, Viewport};
use crate::context::Scope;
use crate::controlled::{ControlledField, Uncontrollable};
use crate::error::Result;
use crate::node::{Component, Node, render_children};
use crate::styling::{BsProps, StyleRegistration, StyleVariant};

inventory::submit! {
    StyleRegistration::new("navbar", &["default", "inverse"], "default")
}

/// The `role` attribute of the navbar's outer element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Role {
    /// `"navigation"` unless the element is a `<nav>` (or a pass-through
    /// `role` attribute is present).
    #[default]
    Inferred,
    /// Always this value.
    Explicit(String),
    /// Never emit a role.
    Suppressed,
}

/// Properties of a [`Navbar`].
#[derive(Clone)]
pub struct NavbarProps {
    /// Fixed to the top of the screen.
    pub fixed_top: bool,
    /// Fixed to the bottom of the screen.
    pub fixed_bottom: bool,
    /// Full width, scrolls away with the page.
    pub static_top: bool,
    /// Dark variant; overrides `bs_style`.
    pub inverse: bool,
    /// Fluid inner container instead of fixed breakpoints.
    pub fluid: bool,
    /// Outer element tag.
    pub component_class: String,
    /// Base class for this navbar and its descendants.
    pub bs_class: String,
    /// Explicit style variant.
    pub bs_style: Option<StyleVariant>,
    /// Controlled expanded state.
    pub expanded: Option<bool>,
    /// Initial expanded state when uncontrolled.
    pub default_expanded: Option<bool>,
    /// Called with the proposed expanded state.
    pub on_toggle: Option<Callback<bool>>,
    /// Called when a selectable descendant is selected.
    pub on_select: Option<SelectHandler>,
    /// Toggle after a selection while in a mobile viewport.
    pub toggle_on_select: bool,
    pub role: Role,
    pub class_name: Option<String>,
    /// Attributes forwarded verbatim to the outer element.
    pub attrs: BTreeMap<String, AttrValue>,
    pub children: Vec<Node>,
}

impl Default for NavbarProps {
    fn default() -> Self {
        Self {
            fixed_top: false,
            fixed_bottom: false,
            static_top: false,
            inverse: false,
            fluid: false,
            component_class: "nav".to_string(),
            bs_class: "navbar".to_string(),
            bs_style: None,
            expanded: None,
            default_expanded: None,
            on_toggle: None,
            on_select: None,
            toggle_on_select: false,
            role: Role::default(),
            class_name: None,
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }
}

impl NavbarProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fixed_top(mut self, on: bool) -> Self {
        self.fixed_top = on;
        self
    }

    pub fn fixed_bottom(mut self, on: bool) -> Self {
        self.fixed_bottom = on;
        self
    }

    pub fn static_top(mut self, on: bool) -> Self {
        self.static_top = on;
        self
    }

    pub fn inverse(mut self, on: bool) -> Self {
        self.inverse = on;
        self
    }

    pub fn fluid(mut self, on: bool) -> Self {
        self.fluid = on;
        self
    }

    pub fn component_class(mut self, tag: impl Into<String>) -> Self {
        self.component_class = tag.into();
        self
    }

    pub fn bs_class(mut self, bs_class: impl Into<String>) -> Self {
        self.bs_class = bs_class.into();
        self
    }

    pub fn bs_style(mut self, style: impl Into<StyleVariant>) -> Self {
        self.bs_style = Some(style.into());
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }

    pub fn default_expanded(mut self, expanded: bool) -> Self {
        self.default_expanded = Some(expanded);
        self
    }

    pub fn on_toggle<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_toggle = Some(Arc::new(f));
        self
    }

    pub fn on_select<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &Event) + Send + Sync + 'static,
    {
        self.on_select = Some(Arc::new(f));
        self
    }

    pub fn toggle_on_select(mut self, on: bool) -> Self {
        self.toggle_on_select = on;
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Role::Explicit(role.into());
        self
    }

    pub fn no_role(mut self) -> Self {
        self.role = Role::Suppressed;
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

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    fn bs_props(&self) -> BsProps {
        let style = if self.inverse {
            Some(StyleVariant::INVERSE)
        } else {
            self.bs_style.clone()
        };
        BsProps::new(self.bs_class.as_str()).style(style)
    }
}

/// The `expanded`/`on_toggle` pair of [`NavbarProps`].
pub struct Expanded;

impl ControlledField<NavbarProps> for Expanded {
    type Value = bool;

    const NAME: &'static str = "navbar expanded";

    fn value(props: &NavbarProps) -> Option<bool> {
        props.expanded
    }

    fn set_value(props: &mut NavbarProps, value: Option<bool>) {
        props.expanded = value;
    }

    fn handler(props: &NavbarProps) -> Option<Callback<bool>> {
        props.on_toggle.clone()
    }

    fn set_handler(props: &mut NavbarProps, handler: Callback<bool>) {
        props.on_toggle = Some(handler);
    }

    fn default_value(props: &NavbarProps) -> Option<bool> {
        Some(props.default_expanded.unwrap_or(false))
    }
}

/// The navbar renderer. Treats `expanded` as always supplied.
///
/// Use [`Navbar`] unless you manage the expanded state entirely yourself.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavbarView;

/// A navbar whose expanded state may be controlled or uncontrolled.
pub type Navbar = Uncontrollable<NavbarView, Expanded>;

impl NavbarView {
    fn toggle_action(props: &NavbarProps, expanded: bool) -> Action {
        let on_toggle = props.on_toggle.clone();
        Arc::new(move || {
            log::debug!("navbar toggle requested: {} -> {}", expanded, !expanded);
            if let Some(on_toggle) = &on_toggle {
                on_toggle(!expanded);
            }
        })
    }

    fn context(props: &NavbarProps, scope: &Scope<'_>) -> NavbarContext {
        let expanded = props.expanded.unwrap_or(false);
        let on_toggle = Self::toggle_action(props, expanded);

        let fallback = NavkitConfig::default();
        let config = scope.consume_or(&fallback);
        let in_mobile_viewport = config.is_mobile(scope.consume::<Viewport>());

        let toggle_on_select: Option<SelectHandler> =
            if props.toggle_on_select && in_mobile_viewport {
                let toggle = Arc::clone(&on_toggle);
                Some(Arc::new(move |key: &str, _event: &Event| {
                    log::debug!("navbar item '{key}' selected in mobile viewport; toggling");
                    toggle();
                }))
            } else {
                None
            };

        NavbarContext {
            bs_class: props.bs_class.clone(),
            expanded,
            on_toggle,
            on_select: chain_select(props.on_select.clone(), toggle_on_select),
        }
    }
}

impl Component for NavbarView {
    type Props = NavbarProps;

    fn render(&self, props: &NavbarProps, scope: &Scope<'_>) -> Result<Element> {
        let classes = props.bs_props().class_set([
            ("fixed-top", props.fixed_top),
            ("fixed-bottom", props.fixed_bottom),
            ("static-top", props.static_top),
        ])?;

        let bundle = Self::context(props, scope);
        log::trace!("navbar publishing {bundle:?}");
        let child_scope = scope.provide(bundle);
        let children = render_children(&props.children, &child_scope)?;

        let mut element = Element::new(props.component_class.as_str()).attrs(props.attrs.clone());
        match &props.role {
            Role::Explicit(role) => element = element.attr("role", role.as_str()),
            Role::Suppressed => {
                element.attrs.remove("role");
            }
            Role::Inferred => {
                if element.tag != "nav" && !element.attrs.contains_key("role") {
                    element = element.attr("role", "navigation");
                }
            }
        }
        if let Some(class_name) = &props.class_name {
            element = element.class(class_name.as_str());
        }

        Ok(element
            .classes(classes.enabled())
            .child(Grid::new().fluid(props.fluid).wrap(children)))
    }
}
