use std::sync::{Arc, Mutex};

use navkit::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Accent(&'static str);

#[derive(Debug, Clone, PartialEq)]
struct Density(u8);

/// A node that records the accent it sees when rendered.
fn probe(seen: &Arc<Mutex<Vec<Option<Accent>>>>) -> Node {
    let seen = Arc::clone(seen);
    Node::render_fn(move |scope: &Scope<'_>| {
        seen.lock().unwrap().push(scope.consume::<Accent>().cloned());
        Ok(Element::span())
    })
}

/// A container that publishes an accent to its children.
struct AccentBox {
    accent: Accent,
    children: Vec<Node>,
}

impl Render for AccentBox {
    fn render(&self, scope: &Scope<'_>) -> Result<Element> {
        let scope = scope.provide(self.accent.clone());
        Ok(Element::div().children(render_children(&self.children, &scope)?))
    }
}

// ============================================================================
// Scope
// ============================================================================

#[test]
fn test_root_scope_is_empty() {
    let root = Scope::root();
    assert_eq!(root.depth(), 0);
    assert!(!root.has::<Accent>());
    assert_eq!(root.consume::<Accent>(), None);
}

#[test]
fn test_consume_by_type() {
    let root = Scope::root();
    let a = root.provide(Accent("blue"));
    let b = a.provide(Density(2));

    assert_eq!(b.consume::<Accent>(), Some(&Accent("blue")));
    assert_eq!(b.consume::<Density>(), Some(&Density(2)));
    assert_eq!(a.consume::<Density>(), None);
    assert_eq!(b.depth(), 2);
}

#[test]
fn test_innermost_provider_wins() {
    let root = Scope::root();
    let outer = root.provide(Accent("blue"));
    let middle = outer.provide(Density(1));
    let inner = middle.provide(Accent("red"));

    assert_eq!(inner.consume::<Accent>(), Some(&Accent("red")));
    assert_eq!(middle.consume::<Accent>(), Some(&Accent("blue")));
}

#[test]
fn test_consume_or_falls_back() {
    let root = Scope::root();
    let fallback = Accent("none");
    assert_eq!(root.consume_or(&fallback), &Accent("none"));

    let scope = root.provide(Accent("green"));
    assert_eq!(scope.consume_or(&fallback), &Accent("green"));
}

#[test]
fn test_debug_lists_provided_types() {
    let root = Scope::root();
    let scope = root.provide(Density(3));
    let debug = format!("{scope:?}");
    assert!(debug.contains("Density"));
}

// ============================================================================
// Propagation through the render tree
// ============================================================================

#[test]
fn test_descendant_reads_through_intermediate_elements() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let tree = AccentBox {
        accent: Accent("blue"),
        children: vec![Node::tree(
            Element::div().class("row"),
            [Node::tree(Element::div().class("col"), [probe(&seen)])],
        )],
    };

    tree.render(&Scope::root()).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![Some(Accent("blue"))]);
}

#[test]
fn test_nested_containers_shadow_outer() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let tree = AccentBox {
        accent: Accent("blue"),
        children: vec![
            probe(&seen),
            Node::component(AccentBox {
                accent: Accent("red"),
                children: vec![probe(&seen)],
            }),
            probe(&seen),
        ],
    };

    tree.render(&Scope::root()).unwrap();
    assert_eq!(
        *seen.lock().unwrap(),
        vec![Some(Accent("blue")), Some(Accent("red")), Some(Accent("blue"))]
    );
}

#[test]
fn test_no_provider_yields_none() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let node = Node::tree(Element::div(), [probe(&seen)]);

    render_node(&node, &Scope::root()).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![None]);
}

#[test]
fn test_independent_trees_do_not_interfere() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let blue = AccentBox {
        accent: Accent("blue"),
        children: vec![probe(&seen)],
    };
    let bare = Node::tree(Element::div(), [probe(&seen)]);

    blue.render(&Scope::root()).unwrap();
    render_node(&bare, &Scope::root()).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![Some(Accent("blue")), None]);
}

#[test]
fn test_empty_nodes_render_nothing() {
    let children = vec![Node::Empty, Node::text("a"), Node::Empty];
    let rendered = render_children(&children, &Scope::root()).unwrap();
    assert_eq!(rendered.len(), 1);
    assert!(rendered[0].is_text());
}
