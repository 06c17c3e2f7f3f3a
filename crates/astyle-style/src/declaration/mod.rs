//! Style declarations.
//!
//! A [`Declaration`] is an ordered mapping from property names (camelCase,
//! as in `backgroundColor`) to [`Value`]s. Recognized [`Pseudo`] keys may
//! hold one level of nested declaration.

mod macros;
mod pseudo;
mod value;

pub use pseudo::Pseudo;
pub use value::Value;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered mapping from property names to values.
///
/// # Example
///
/// ```
/// use astyle_style::{Declaration, Value};
///
/// let declaration = Declaration::new()
///     .with("margin", "10px 5px")
///     .with("fontSize", 2)
///     .with(":hover", Declaration::new().with("color", "red"));
///
/// assert_eq!(declaration.len(), 3);
/// assert_eq!(declaration.get("fontSize"), Some(&Value::Number(2.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Declaration {
    properties: IndexMap<String, Value>,
}

impl Declaration {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, returning the declaration (builder style).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an entry.
    ///
    /// An existing key keeps its position and has its value replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(name.into(), value.into())
    }

    /// Remove an entry, preserving the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.properties.shift_remove(name)
    }

    /// Get an entry's value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Get a mutable reference to an entry's value.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.properties.get_mut(name)
    }

    /// Check if an entry exists.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the declaration is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over property names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (name, value) in self.iter() {
            write!(f, " {name}: {value};")?;
        }
        f.write_str(" }")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Declaration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Declaration {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Declaration {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

/// Convert a camelCase property name to its CSS (kebab-case) form.
///
/// Every ASCII uppercase letter becomes `-` followed by its lowercase.
///
/// ```
/// use astyle_style::declaration::css_name;
///
/// assert_eq!(css_name("backgroundColor"), "background-color");
/// assert_eq!(css_name("color"), "color");
/// ```
pub fn css_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
