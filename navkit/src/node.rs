//! Render tree nodes and the component traits.
//!
//! A [`Node`] is the unit a caller hands to a container as `children`. Nodes
//! are rendered lazily with whatever [`Scope`] the container passes down, which
//! is how a value published by a container reaches descendants that never
//! receive it as a property.

use std::fmt;
use std::sync::Arc;

use markup::Element;

use crate::context::Scope;
use crate::error::Result;

/// Something that renders to an element within a scope.
pub trait Render: Send + Sync {
    fn render(&self, scope: &Scope<'_>) -> Result<Element>;
}

/// A component whose instance persists across renders.
///
/// Unlike [`Render`] implementors, which carry their own properties, a
/// component receives its properties on every render. The instance itself is
/// where state that must survive between renders lives.
pub trait Component: Send + Sync {
    type Props: Clone + Send + Sync + 'static;

    fn render(&self, props: &Self::Props, scope: &Scope<'_>) -> Result<Element>;
}

/// A component instance paired with the properties to render it with.
pub struct Mount<C: Component> {
    component: Arc<C>,
    props: C::Props,
}

impl<C: Component> Mount<C> {
    pub fn new(component: Arc<C>, props: C::Props) -> Self {
        Self { component, props }
    }
}

impl<C: Component> Render for Mount<C> {
    fn render(&self, scope: &Scope<'_>) -> Result<Element> {
        self.component.render(&self.props, scope)
    }
}

struct RenderFn<F>(F);

impl<F> Render for RenderFn<F>
where
    F: Fn(&Scope<'_>) -> Result<Element> + Send + Sync,
{
    fn render(&self, scope: &Scope<'_>) -> Result<Element> {
        (self.0)(scope)
    }
}

/// A node in the view tree
#[derive(Clone, Default)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Text content
    Text(String),

    /// A pre-built element, rendered as-is
    Element(Element),

    /// An element whose children are rendered in the current scope
    Tree {
        element: Element,
        children: Vec<Node>,
    },

    /// A component rendered in the current scope
    Component(Arc<dyn Render>),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn element(element: Element) -> Self {
        Self::Element(element)
    }

    /// An intermediate element that passes the scope through to its children.
    pub fn tree(element: Element, children: impl IntoIterator<Item = Node>) -> Self {
        Self::Tree {
            element,
            children: children.into_iter().collect(),
        }
    }

    pub fn component<R: Render + 'static>(component: R) -> Self {
        Self::Component(Arc::new(component))
    }

    /// A component given as a closure over the scope.
    pub fn render_fn<F>(f: F) -> Self
    where
        F: Fn(&Scope<'_>) -> Result<Element> + Send + Sync + 'static,
    {
        Self::Component(Arc::new(RenderFn(f)))
    }

    /// Mount a persistent component instance with the given properties.
    pub fn mount<C: Component + 'static>(component: &Arc<C>, props: C::Props) -> Self {
        Self::Component(Arc::new(Mount::new(Arc::clone(component), props)))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Element(e) => write!(f, "Element(<{}>)", e.tag),
            Self::Tree { element, children } => {
                write!(f, "Tree(<{}>, {} children)", element.tag, children.len())
            }
            Self::Component(_) => write!(f, "Component(...)"),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Self::Text(content.to_string())
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Self::Text(content)
    }
}

/// Render a node. `Empty` renders to nothing.
pub fn render_node(node: &Node, scope: &Scope<'_>) -> Result<Option<Element>> {
    let element = match node {
        Node::Empty => return Ok(None),
        Node::Text(content) => Element::text(content.clone()),
        Node::Element(element) => element.clone(),
        Node::Tree { element, children } => element
            .clone()
            .children(render_children(children, scope)?),
        Node::Component(component) => component.render(scope)?,
    };
    Ok(Some(element))
}

/// Render a list of nodes in order, skipping empty ones.
pub fn render_children(children: &[Node], scope: &Scope<'_>) -> Result<Vec<Element>> {
    let mut rendered = Vec::with_capacity(children.len());
    for child in children {
        if let Some(element) = render_node(child, scope)? {
            rendered.push(element);
        }
    }
    Ok(rendered)
}
