//! Concrete HTML tag types
//!
//! Each type pins its tag name at construction and selects container or
//! void capability. Per-tag setters cover the attributes most commonly
//! written on that tag; anything else goes through `attr`.

use crate::element::{Element, VoidElement};
use crate::error::Result;
use crate::node::Node;

/// Methods shared by every tag type.
macro_rules! common_methods {
    () => {
        /// Sets an arbitrary attribute, validating the name.
        pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
            self.element.set_attr(name, value)?;
            Ok(self)
        }

        /// Sets the `id` attribute
        pub fn id(mut self, value: impl Into<String>) -> Self {
            self.element.set_known("id", value.into());
            self
        }

        /// Sets the `class` attribute
        pub fn class(mut self, value: impl Into<String>) -> Self {
            self.element.set_known("class", value.into());
            self
        }

        /// Sets the `style` attribute
        pub fn style(mut self, value: impl Into<String>) -> Self {
            self.element.set_known("style", value.into());
            self
        }

        /// Sets the `title` attribute
        pub fn title(mut self, value: impl Into<String>) -> Self {
            self.element.set_known("title", value.into());
            self
        }

        /// Returns the value of the named attribute, if set
        pub fn attribute(&self, name: &str) -> Option<&str> {
            self.element.attribute(name)
        }

        /// Renders to an HTML string.
        pub fn render(&self) -> String {
            self.element.render()
        }

        /// Renders into a caller-provided buffer.
        pub fn render_into(&self, out: &mut String) {
            self.element.render_into(out);
        }
    };
}

/// Child-management methods shared by container tag types.
macro_rules! container_methods {
    () => {
        /// Appends a child node, taking ownership of it.
        pub fn child(mut self, node: impl Into<Node>) -> Self {
            self.element = self.element.child(node);
            self
        }

        /// Appends a child in place; handy in loops.
        pub fn append(&mut self, node: impl Into<Node>) -> &mut Self {
            self.element.append(node);
            self
        }

        /// Appends a text child; the content is escaped at render time.
        pub fn text(mut self, content: impl Into<String>) -> Self {
            self.element = self.element.text(content);
            self
        }

        /// Unwraps into the underlying generic [`Element`].
        pub fn into_element(self) -> Element {
            self.element
        }
    };
}

macro_rules! sugar_setters {
    ($($method:ident => $attr:literal),* $(,)?) => {
        $(
            #[doc = concat!("Sets the `", $attr, "` attribute")]
            pub fn $method(mut self, value: impl Into<String>) -> Self {
                self.element.set_known($attr, value.into());
                self
            }
        )*
    };
}

macro_rules! container_tag {
    (
        $(#[$meta:meta])*
        $name:ident, $tag:literal $(, { $($sugar:ident => $attr:literal),* $(,)? })?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            element: Element,
        }

        impl $name {
            #[doc = concat!("Creates an empty `<", $tag, ">` element")]
            pub fn new() -> Self {
                Self {
                    element: Element::from_static($tag),
                }
            }

            common_methods!();
            container_methods!();
            $(sugar_setters! { $($sugar => $attr),* })?
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<$name> for Node {
            fn from(value: $name) -> Self {
                Self::Element(value.element)
            }
        }
    };
}

macro_rules! void_tag {
    (
        $(#[$meta:meta])*
        $name:ident, $tag:literal $(, { $($sugar:ident => $attr:literal),* $(,)? })?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            element: VoidElement,
        }

        impl $name {
            #[doc = concat!("Creates a `<", $tag, " />` element")]
            pub fn new() -> Self {
                Self {
                    element: VoidElement::from_static($tag),
                }
            }

            common_methods!();

            /// Unwraps into the underlying generic [`VoidElement`].
            pub fn into_element(self) -> VoidElement {
                self.element
            }

            $(sugar_setters! { $($sugar => $attr),* })?
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<$name> for Node {
            fn from(value: $name) -> Self {
                Self::Void(value.element)
            }
        }
    };
}

/// The `<html>` document root.
///
/// `new()` presets `xmlns="http://www.w3.org/1999/xhtml"`; use
/// [`Html::bare`] for a root with no preset attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Html {
    element: Element,
}

impl Html {
    /// Creates an `<html>` element with the XHTML namespace preset
    pub fn new() -> Self {
        let mut element = Element::from_static("html");
        element.set_known("xmlns", "http://www.w3.org/1999/xhtml".to_owned());
        Self { element }
    }

    /// Creates an `<html>` element with no preset attributes
    pub fn bare() -> Self {
        Self {
            element: Element::from_static("html"),
        }
    }

    common_methods!();
    container_methods!();
    sugar_setters! {
        lang => "lang",
        xmlns => "xmlns",
    }
}

impl Default for Html {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Html> for Node {
    fn from(value: Html) -> Self {
        Self::Element(value.element)
    }
}

container_tag!(
    /// The `<a>` anchor element
    A, "a", {
        href => "href",
        target => "target",
        name => "name",
        rel => "rel",
    }
);

container_tag!(
    /// The `<head>` metadata container
    Head, "head"
);

container_tag!(
    /// The `<body>` document body
    Body, "body"
);

container_tag!(
    /// The `<title>` document title
    Title, "title"
);

container_tag!(
    /// The `<div>` generic block container
    Div, "div"
);

container_tag!(
    /// The `<span>` generic inline container
    Span, "span"
);

container_tag!(
    /// The `<p>` paragraph element
    P, "p"
);

container_tag!(
    /// The `<pre>` preformatted-text element
    Pre, "pre"
);

container_tag!(
    /// The `<h1>` heading
    H1, "h1"
);

container_tag!(
    /// The `<h2>` heading
    H2, "h2"
);

container_tag!(
    /// The `<h3>` heading
    H3, "h3"
);

container_tag!(
    /// The `<h4>` heading
    H4, "h4"
);

container_tag!(
    /// The `<h5>` heading
    H5, "h5"
);

container_tag!(
    /// The `<h6>` heading
    H6, "h6"
);

container_tag!(
    /// The `<em>` emphasis element
    Em, "em"
);

container_tag!(
    /// The `<strong>` strong-importance element
    Strong, "strong"
);

container_tag!(
    /// The `<b>` bold element
    B, "b"
);

container_tag!(
    /// The `<i>` italic element
    I, "i"
);

container_tag!(
    /// The `<u>` underline element
    U, "u"
);

container_tag!(
    /// The `<small>` side-comment element
    Small, "small"
);

container_tag!(
    /// The `<code>` inline-code element
    Code, "code"
);

container_tag!(
    /// The `<ul>` unordered list
    Ul, "ul"
);

container_tag!(
    /// The `<ol>` ordered list
    Ol, "ol"
);

container_tag!(
    /// The `<li>` list item
    Li, "li"
);

container_tag!(
    /// The `<table>` element
    Table, "table"
);

container_tag!(
    /// The `<caption>` table caption
    Caption, "caption"
);

container_tag!(
    /// The `<thead>` table header group
    Thead, "thead"
);

container_tag!(
    /// The `<tbody>` table body group
    Tbody, "tbody"
);

container_tag!(
    /// The `<tfoot>` table footer group
    Tfoot, "tfoot"
);

container_tag!(
    /// The `<tr>` table row
    Tr, "tr"
);

container_tag!(
    /// The `<td>` table data cell
    Td, "td"
);

container_tag!(
    /// The `<th>` table header cell
    Th, "th"
);

container_tag!(
    /// The `<form>` element
    Form, "form", {
        action => "action",
        method => "method",
    }
);

container_tag!(
    /// The `<label>` form label; `html_for` sets the `for` attribute
    Label, "label", {
        html_for => "for",
    }
);

container_tag!(
    /// The `<button>` element
    Button, "button", {
        name => "name",
        value => "value",
    }
);

container_tag!(
    /// The `<script>` element; scripts must not self-close, so this is
    /// a container even when empty
    Script, "script", {
        src => "src",
    }
);

void_tag!(
    /// The `<br />` line break
    Br, "br"
);

void_tag!(
    /// The `<hr />` thematic break
    Hr, "hr"
);

void_tag!(
    /// The `<img />` image element
    Img, "img", {
        src => "src",
        alt => "alt",
        width => "width",
        height => "height",
    }
);

void_tag!(
    /// The `<input />` form control
    Input, "input", {
        name => "name",
        value => "value",
    }
);

void_tag!(
    /// The `<link />` external-resource reference
    Link, "link", {
        rel => "rel",
        href => "href",
    }
);

void_tag!(
    /// The `<meta />` metadata element
    Meta, "meta", {
        name => "name",
        content => "content",
        charset => "charset",
    }
);
