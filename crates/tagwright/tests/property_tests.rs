//! Property-based tests for attribute handling and rendering
//!
//! These tests use proptest to verify:
//! 1. Valid attribute names round-trip through set + render
//! 2. Append order is exactly render order
//! 3. Rendering is idempotent
//! 4. Escaping never leaks raw markup characters and is lossless

use proptest::prelude::*;
use tagwright::{Br, Div, escape_attr, escape_text, Node, Span, Text};

/// Strategy for names accepted by the attribute name rule
fn arb_attr_name() -> impl Strategy<Value = String> {
    "[a-zA-Z_:][a-zA-Z0-9_:.-]{0,12}"
}

/// Strategy for small arbitrary trees of divs, text and line breaks
fn arb_tree() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        any::<String>().prop_map(|s| Node::from(Text::new(s))),
        Just(Node::from(Br::new())),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(|children| {
            let mut div = Div::new();
            for child in children {
                div.append(child);
            }
            Node::from(div)
        })
    })
}

proptest! {
    #[test]
    fn set_attr_then_render_yields_exactly_one_pair(
        name in arb_attr_name(),
        value in any::<String>(),
    ) {
        let div = Div::new().attr(name.clone(), value.clone()).unwrap();
        let expected = format!("<div {}=\"{}\"></div>", name, escape_attr(&value));
        prop_assert_eq!(div.render(), expected);
    }

    #[test]
    fn last_write_wins_keeps_first_position(
        name in arb_attr_name(),
        other in arb_attr_name(),
        first in any::<String>(),
        second in any::<String>(),
    ) {
        prop_assume!(name != other);
        let div = Div::new()
            .attr(name.clone(), first).unwrap()
            .attr(other.clone(), "x").unwrap()
            .attr(name.clone(), second.clone()).unwrap();
        let expected = format!(
            "<div {}=\"{}\" {}=\"x\"></div>",
            name,
            escape_attr(&second),
            other
        );
        prop_assert_eq!(div.render(), expected);
    }

    #[test]
    fn children_concatenate_in_append_order(
        texts in prop::collection::vec(any::<String>(), 0..8),
    ) {
        let mut span = Span::new();
        for t in &texts {
            span.append(Text::new(t.clone()));
        }
        let inner: String = texts.iter().map(|t| escape_text(t)).collect();
        prop_assert_eq!(span.render(), format!("<span>{inner}</span>"));
    }

    #[test]
    fn render_is_idempotent(node in arb_tree()) {
        prop_assert_eq!(node.render(), node.render());
    }

    #[test]
    fn escaped_text_has_no_raw_markup(s in any::<String>()) {
        let escaped = escape_text(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert_eq!(unescape(&escaped), s);
    }

    #[test]
    fn escaped_attr_value_cannot_close_the_quote(s in any::<String>()) {
        let escaped = escape_attr(&s);
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
    }
}

/// Reverses `escape_text`; entity replacements run in the opposite
/// order of the escape so `&amp;` is resolved last.
fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
