//! Container and void element types with the fluent construction API

use tracing::trace;

use crate::attribute::{validate_name, Attributes};
use crate::error::Result;
use crate::node::{Node, Text};
use crate::render;

/// An element that owns an ordered sequence of child nodes.
///
/// The tag name is fixed at construction. Children are stored by value,
/// so a node belongs to exactly one parent and cycles cannot be built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) attributes: Attributes,
    pub(crate) children: Vec<Node>,
}

impl Element {
    /// Creates an empty container element with the given tag name.
    ///
    /// The name is validated with the same rule as attribute names; use
    /// the concrete tag types in [`crate::tags`] for the common HTML
    /// vocabulary.
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        validate_name(&tag)?;
        Ok(Self::from_static_tag_string(tag))
    }

    pub(crate) fn from_static(tag: &'static str) -> Self {
        debug_assert!(validate_name(tag).is_ok());
        Self::from_static_tag_string(tag.to_owned())
    }

    fn from_static_tag_string(tag: String) -> Self {
        Self {
            tag,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Returns the tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the attribute bag
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the children in append order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Sets an arbitrary attribute, validating the name; consumes and
    /// returns the element so calls chain with `?`.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        self.attributes.set(name, value)?;
        Ok(self)
    }

    /// In-place variant of [`Element::attr`]. The element is unchanged
    /// when validation fails.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.attributes.set(name, value)
    }

    pub(crate) fn set_known(&mut self, name: &'static str, value: String) {
        self.attributes.set_static(name, value);
    }

    /// Sets the `id` attribute
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.set_known("id", value.into());
        self
    }

    /// Sets the `class` attribute
    pub fn class(mut self, value: impl Into<String>) -> Self {
        self.set_known("class", value.into());
        self
    }

    /// Sets the `style` attribute
    pub fn style(mut self, value: impl Into<String>) -> Self {
        self.set_known("style", value.into());
        self
    }

    /// Sets the `title` attribute
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.set_known("title", value.into());
        self
    }

    /// Returns the value of the named attribute, if set
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Removes the named attribute, returning its value if it was set
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Appends a child node, taking ownership of it.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends a child in place; handy in loops where the consuming
    /// fluent style is awkward.
    pub fn append(&mut self, node: impl Into<Node>) -> &mut Self {
        self.children.push(node.into());
        self
    }

    /// Appends each node of an iterator in order.
    pub fn extend(mut self, nodes: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends a text child; the content is HTML-escaped at render time.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Text::new(content))
    }

    /// Renders this element and its descendants to an HTML string.
    pub fn render(&self) -> String {
        trace!(tag = %self.tag, "rendering element tree");
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Renders into a caller-provided buffer.
    pub fn render_into(&self, out: &mut String) {
        render::render_element(self, out);
    }
}

/// A childless (void) element such as `<br />` or `<img />`.
///
/// Leaf-ness is structural: the type has no child storage and no append
/// operation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoidElement {
    pub(crate) tag: String,
    pub(crate) attributes: Attributes,
}

impl VoidElement {
    /// Creates a void element with the given tag name, validated with
    /// the same rule as attribute names.
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        validate_name(&tag)?;
        Ok(Self {
            tag,
            attributes: Attributes::new(),
        })
    }

    pub(crate) fn from_static(tag: &'static str) -> Self {
        debug_assert!(validate_name(tag).is_ok());
        Self {
            tag: tag.to_owned(),
            attributes: Attributes::new(),
        }
    }

    /// Returns the tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the attribute bag
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Sets an arbitrary attribute, validating the name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        self.attributes.set(name, value)?;
        Ok(self)
    }

    /// In-place variant of [`VoidElement::attr`].
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.attributes.set(name, value)
    }

    pub(crate) fn set_known(&mut self, name: &'static str, value: String) {
        self.attributes.set_static(name, value);
    }

    /// Sets the `id` attribute
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.set_known("id", value.into());
        self
    }

    /// Sets the `class` attribute
    pub fn class(mut self, value: impl Into<String>) -> Self {
        self.set_known("class", value.into());
        self
    }

    /// Sets the `style` attribute
    pub fn style(mut self, value: impl Into<String>) -> Self {
        self.set_known("style", value.into());
        self
    }

    /// Sets the `title` attribute
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.set_known("title", value.into());
        self
    }

    /// Returns the value of the named attribute, if set
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Removes the named attribute, returning its value if it was set
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Renders this element to an HTML string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Renders into a caller-provided buffer.
    pub fn render_into(&self, out: &mut String) {
        render::render_void(self, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_fluent_chain() -> Result<()> {
        let el = Element::new("div")?
            .id("main")
            .class("wide")
            .attr("data-kind", "demo")?
            .text("hello");
        assert_eq!(el.tag(), "div");
        assert_eq!(el.attribute("id"), Some("main"));
        assert_eq!(el.attribute("data-kind"), Some("demo"));
        assert_eq!(el.children().len(), 1);
        Ok(())
    }

    #[test]
    fn test_append_in_place() -> Result<()> {
        let mut list = Element::new("ul")?;
        for label in ["one", "two", "three"] {
            list.append(Element::new("li")?.text(label));
        }
        assert_eq!(list.children().len(), 3);
        Ok(())
    }

    #[test]
    fn test_extend_appends_in_order() -> Result<()> {
        let row = Element::new("tr")?.extend([
            Element::new("td")?.text("a"),
            Element::new("td")?.text("b"),
        ]);
        assert_eq!(row.render(), "<tr><td>a</td><td>b</td></tr>");
        Ok(())
    }

    #[test]
    fn test_failed_attr_leaves_element_unchanged() -> Result<()> {
        let mut el = Element::new("div")?;
        el.set_attr("id", "keep")?;
        assert!(el.set_attr("not valid", "x").is_err());
        assert_eq!(el.attributes().len(), 1);
        assert_eq!(el.render(), "<div id=\"keep\"></div>");
        Ok(())
    }

    #[test]
    fn test_invalid_tag_name() {
        let err = Element::new("").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::EmptyName);
        assert!(VoidElement::new("no spaces").is_err());
    }

    #[test]
    fn test_custom_void_element() -> Result<()> {
        let hr = VoidElement::new("hr")?.class("rule");
        assert_eq!(hr.render(), "<hr class=\"rule\" />");
        Ok(())
    }

    #[test]
    fn test_remove_attr() -> Result<()> {
        let mut el = Element::new("p")?;
        el.set_attr("id", "x")?;
        assert_eq!(el.remove_attr("id"), Some("x".to_string()));
        assert_eq!(el.remove_attr("id"), None);
        assert_eq!(el.render(), "<p></p>");
        Ok(())
    }
}
