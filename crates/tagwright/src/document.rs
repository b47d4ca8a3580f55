//! Document-level types: doctype declarations and whole-page composition

use tracing::debug;

use crate::tags::Html;

/// The document type declarations the renderer can emit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentType {
    /// HTML5 (`<!DOCTYPE html>`)
    #[default]
    Html5,
    /// HTML 4.01 Strict
    HtmlStrict,
    /// HTML 4.01 Transitional
    HtmlTransitional,
    /// HTML 4.01 Frameset
    HtmlFrameset,
    /// XHTML 1.0 Strict
    XhtmlStrict,
    /// XHTML 1.0 Transitional
    XhtmlTransitional,
    /// XHTML 1.0 Frameset
    XhtmlFrameset,
}

impl DocumentType {
    /// The exact `<!DOCTYPE ...>` line for this document type.
    pub const fn declaration(self) -> &'static str {
        match self {
            Self::Html5 => "<!DOCTYPE html>",
            Self::HtmlStrict => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">"
            }
            Self::HtmlTransitional => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">"
            }
            Self::HtmlFrameset => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Frameset//EN\" \"http://www.w3.org/TR/html4/frameset.dtd\">"
            }
            Self::XhtmlStrict => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">"
            }
            Self::XhtmlTransitional => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">"
            }
            Self::XhtmlFrameset => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Frameset//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd\">"
            }
        }
    }
}

/// A complete HTML document: a doctype declaration followed by an
/// `<html>` root.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    doctype: DocumentType,
    root: Html,
}

impl Document {
    /// Creates a document with the default [`DocumentType::Html5`]
    /// doctype.
    pub fn new(root: Html) -> Self {
        Self {
            doctype: DocumentType::default(),
            root,
        }
    }

    /// Creates a document with an explicit doctype.
    pub fn with_doctype(doctype: DocumentType, root: Html) -> Self {
        Self { doctype, root }
    }

    /// Returns the doctype
    pub fn doctype(&self) -> DocumentType {
        self.doctype
    }

    /// Returns the root element
    pub fn root(&self) -> &Html {
        &self.root
    }

    /// Renders the doctype line and the whole tree to one string.
    pub fn render(&self) -> String {
        debug!(doctype = ?self.doctype, "rendering document");
        let mut out = String::from(self.doctype.declaration());
        self.root.render_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{Body, Div};

    #[test]
    fn test_transitional_declaration() {
        assert_eq!(
            DocumentType::HtmlTransitional.declaration(),
            "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">"
        );
    }

    #[test]
    fn test_html5_declaration() {
        assert_eq!(DocumentType::Html5.declaration(), "<!DOCTYPE html>");
    }

    #[test]
    fn test_document_renders_doctype_then_root() {
        let doc = Document::new(Html::new().child(Body::new().child(Div::new())));
        assert_eq!(
            doc.render(),
            "<!DOCTYPE html><html xmlns=\"http://www.w3.org/1999/xhtml\"><body><div></div></body></html>"
        );
    }

    #[test]
    fn test_document_with_explicit_doctype() {
        let doc = Document::with_doctype(DocumentType::XhtmlStrict, Html::new());
        assert!(doc.render().starts_with("<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\""));
        assert_eq!(doc.doctype(), DocumentType::XhtmlStrict);
        assert_eq!(
            doc.root().attribute("xmlns"),
            Some("http://www.w3.org/1999/xhtml")
        );
    }
}
