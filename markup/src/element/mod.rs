mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the first element (depth-first, document order) carrying a class.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Option<&'a Element> {
    if root.has_class(class) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_by_class(child, class) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element matching a predicate, in document order.
pub fn find_all<'a, F>(root: &'a Element, predicate: F) -> Vec<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    fn walk<'a, F: Fn(&Element) -> bool>(el: &'a Element, predicate: &F, out: &mut Vec<&'a Element>) {
        if predicate(el) {
            out.push(el);
        }
        if let Content::Children(children) = &el.content {
            for child in children {
                walk(child, predicate, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(root, &predicate, &mut out);
    out
}
