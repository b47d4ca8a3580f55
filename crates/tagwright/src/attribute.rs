//! Ordered attribute storage for elements

use indexmap::map::Iter;
use indexmap::IndexMap;

use crate::error::{Error, ErrorKind, Result};

/// An order-preserving bag of HTML attributes.
///
/// Names are unique. Setting an existing name overwrites its value in
/// place, so an attribute keeps the position of its first appearance and
/// rendered output stays deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    /// Creates a new empty attribute bag
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Sets an attribute, validating the name.
    ///
    /// The empty value is allowed. When validation fails the bag is left
    /// unmodified.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        self.0.insert(name, value.into());
        Ok(())
    }

    /// Sets an attribute whose name is a compile-time constant already
    /// known to satisfy the name rule.
    pub(crate) fn set_static(&mut self, name: &'static str, value: String) {
        debug_assert!(validate_name(name).is_ok());
        self.0.insert(name.to_owned(), value);
    }

    /// Returns the value stored under the given name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Removes an attribute, returning its value if it was present.
    /// Remaining attributes keep their relative order.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    /// Returns true if an attribute with the given name is present
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of attributes in the bag
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the bag holds no attributes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over name-value pairs in insertion order
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(IndexMap::from_iter(iter))
    }
}

/// Checks a name against the allowed pattern: the first character must
/// be an ASCII letter, `_` or `:`; subsequent characters may also be
/// digits, `-` or `.`.
pub(crate) fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(Error::with_message(
            ErrorKind::EmptyName,
            "attribute name is empty",
        ));
    };
    if !is_name_start(first) || !chars.all(is_name_char) {
        return Err(Error::new(ErrorKind::InvalidName {
            name: name.to_owned(),
        }));
    }
    Ok(())
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == ':'
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-' || c == '.'
}
