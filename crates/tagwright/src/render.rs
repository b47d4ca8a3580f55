//! Recursive HTML serialization

use crate::attribute::Attributes;
use crate::element::{Element, VoidElement};
use crate::node::{Node, Text};

pub(crate) fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(element) => render_element(element, out),
        Node::Void(element) => render_void(element, out),
        Node::Text(text) => render_text(text, out),
    }
}

pub(crate) fn render_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    render_attributes(&element.attributes, out);
    out.push('>');

    for child in &element.children {
        render_node(child, out);
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

pub(crate) fn render_void(element: &VoidElement, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    render_attributes(&element.attributes, out);
    out.push_str(" />");
}

pub(crate) fn render_text(text: &Text, out: &mut String) {
    out.push_str(&escape_text(&text.0));
}

fn render_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes.iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
}

/// Escapes markup-significant characters in text content.
pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes a string for use inside a double-quoted attribute value.
pub fn escape_attr(input: &str) -> String {
    escape_text(input)
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
