//! Error types for tagwright

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An attribute or tag name was empty.
    EmptyName,
    /// An attribute or tag name contained a disallowed character.
    InvalidName { name: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name is empty"),
            Self::InvalidName { name } => write!(f, "invalid name: {name:?}"),
        }
    }
}

/// Main error type for tagwright
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Result type alias for tagwright
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::EmptyName);
        assert_eq!(err.kind(), &ErrorKind::EmptyName);
    }

    #[test]
    fn test_error_display() {
        let err = Error::new(ErrorKind::InvalidName {
            name: "bad name".to_string(),
        });
        let display = err.to_string();
        assert!(display.contains("invalid name"));
        assert!(display.contains("bad name"));
    }

    #[test]
    fn test_custom_message() {
        let err = Error::with_message(ErrorKind::EmptyName, "attribute name is empty");
        assert_eq!(err.message(), "attribute name is empty");
        assert_eq!(err.kind(), &ErrorKind::EmptyName);
    }
}
