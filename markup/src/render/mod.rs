//! HTML serialization of element trees.

use crate::element::{Content, Element};
use crate::types::AttrValue;

/// Elements that never carry content or a closing tag.
const VOID_TAGS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta"];

/// Serialize an element tree to an HTML string.
///
/// Listeners are not part of the output.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(el: &Element, out: &mut String) {
    if el.is_text() {
        if let Content::Text(text) = &el.content {
            out.push_str(&escape(text));
        }
        return;
    }

    out.push('<');
    out.push_str(&el.tag);

    if let Some(id) = &el.id {
        write_attr(out, "id", id);
    }
    if !el.classes.is_empty() {
        write_attr(out, "class", &el.class_attr());
    }
    for (name, value) in &el.attrs {
        match value {
            AttrValue::Text(text) => write_attr(out, name, text),
            AttrValue::Flag(true) => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::Flag(false) => {}
        }
    }
    out.push('>');

    if VOID_TAGS.contains(&el.tag.as_str()) {
        return;
    }

    match &el.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
