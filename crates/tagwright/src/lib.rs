//! tagwright - typed, fluent HTML construction and serialization
//!
//! # Quick Start
//!
//! ```
//! use tagwright::{A, Br};
//!
//! let link = A::new()
//!     .href("http://kolich.com")
//!     .target("_blank")
//!     .text("random text")
//!     .child(Br::new())
//!     .text("more text");
//! assert_eq!(
//!     link.render(),
//!     "<a href=\"http://kolich.com\" target=\"_blank\">random text<br />more text</a>"
//! );
//! ```
//!
//! Trees are plain owned data: appending a child moves it into the
//! parent, so a node has exactly one parent and rendering is a pure,
//! repeatable read.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod attribute;
pub use attribute::Attributes;

pub mod node;
pub use node::{Node, Text};

pub mod element;
pub use element::{Element, VoidElement};

pub mod render;
pub use render::{escape_attr, escape_text};

pub mod document;
pub use document::{Document, DocumentType};

pub mod tags;
pub use tags::*;
