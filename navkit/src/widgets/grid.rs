//! Fixed-width or fluid layout region.

use markup::Element;

use crate::context::Scope;
use crate::error::Result;
use crate::node::{Node, Render, render_children};

/// A `container` (fixed width) or `container-fluid` (full width) region.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    fluid: bool,
    class_name: Option<String>,
    children: Vec<Node>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fluid(mut self, fluid: bool) -> Self {
        self.fluid = fluid;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Wrap already rendered children.
    pub fn wrap(&self, children: Vec<Element>) -> Element {
        let container = if self.fluid { "container-fluid" } else { "container" };
        let mut element = Element::div();
        if let Some(class_name) = &self.class_name {
            element = element.class(class_name.as_str());
        }
        element.class(container).children(children)
    }
}

impl Render for Grid {
    fn render(&self, scope: &Scope<'_>) -> Result<Element> {
        Ok(self.wrap(render_children(&self.children, scope)?))
    }
}
