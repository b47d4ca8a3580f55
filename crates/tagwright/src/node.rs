//! The node tree model

use tracing::trace;

use crate::element::{Element, VoidElement};
use crate::render;

/// A single node in an HTML tree.
///
/// The closed set of variants: container elements that own children,
/// void (childless) elements, and literal text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// A container element
    Element(Element),
    /// A void element
    Void(VoidElement),
    /// Literal text, escaped at render time
    Text(Text),
}

impl Node {
    /// Returns true if this node is a container element
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Returns true if this node is a void element
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void(_))
    }

    /// Returns true if this node is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns the container element if this is one, None otherwise
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the void element if this is one, None otherwise
    pub fn as_void(&self) -> Option<&VoidElement> {
        match self {
            Self::Void(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the text content if this is a text node, None otherwise
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.content()),
            _ => None,
        }
    }

    /// Renders this node and its descendants to an HTML string.
    pub fn render(&self) -> String {
        trace!("rendering node tree");
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Renders into a caller-provided buffer.
    pub fn render_into(&self, out: &mut String) {
        render::render_node(self, out);
    }
}

/// A literal text node.
///
/// Holds only a content string; markup-significant characters are
/// escaped when the tree is rendered, so embedded `<`, `>` and `&` stay
/// literal in the parsed document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Text(pub(crate) String);

impl Text {
    /// Creates a text node with the given content
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// Returns the raw, unescaped content
    pub fn content(&self) -> &str {
        &self.0
    }

    /// Renders the escaped content to a string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        render::render_text(self, &mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<VoidElement> for Node {
    fn from(element: VoidElement) -> Self {
        Self::Void(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Self::Text(Text(content))
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Self::Text(Text(content.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    #[test]
    fn test_from_impls() -> Result<()> {
        let n: Node = Element::new("div")?.into();
        assert!(n.is_element());
        assert_eq!(n.as_element().map(Element::tag), Some("div"));

        let n: Node = VoidElement::new("br")?.into();
        assert!(n.is_void());
        assert_eq!(n.as_void().map(VoidElement::tag), Some("br"));

        let n: Node = "plain".into();
        assert!(n.is_text());
        assert_eq!(n.as_text(), Some("plain"));
        Ok(())
    }

    #[test]
    fn test_text_escapes_on_render() {
        let text = Text::new("a < b & c > d");
        assert_eq!(text.content(), "a < b & c > d");
        assert_eq!(text.render(), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_render_repeatable() -> Result<()> {
        let node: Node = Element::new("p")?.text("same").into();
        assert_eq!(node.render(), node.render());
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_node_round_trips_through_json() -> Result<()> {
        let node: Node = Element::new("div")?
            .id("x")
            .text("body")
            .child(VoidElement::new("br")?)
            .into();
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
        Ok(())
    }
}
