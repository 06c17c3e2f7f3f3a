//! Declaration values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Declaration;

/// The value of one declaration entry.
///
/// Scalars are emitted into rules as text. `Nested` holds a variant block
/// (e.g. the value of `":hover"`); under a key that is not a recognized
/// pseudo-selector it is stringified like any other value.
///
/// # Example
///
/// ```
/// use astyle_style::Value;
///
/// assert_eq!(Value::from(10).to_string(), "10");
/// assert_eq!(Value::from(1.5).to_string(), "1.5");
/// assert_eq!(Value::from("red").to_string(), "red");
/// assert!(Value::from(None::<&str>).is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value; the entry is skipped during compilation.
    #[default]
    Null,
    /// A bare number.
    Number(f64),
    /// Text, emitted verbatim.
    Text(String),
    /// A nested declaration.
    Nested(Declaration),
}

impl Value {
    /// Check if this value is absent.
    ///
    /// A non-finite number has no CSS text and counts as absent.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Number(n) => !n.is_finite(),
            _ => false,
        }
    }

    /// Check if this is a string or a finite number.
    pub fn is_scalar(&self) -> bool {
        match self {
            Value::Number(n) => n.is_finite(),
            Value::Text(_) => true,
            _ => false,
        }
    }

    /// Get the number, if this is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the nested declaration, if this is one.
    pub fn as_nested(&self) -> Option<&Declaration> {
        match self {
            Value::Nested(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            // Exponent form past the range where plain digits stay readable.
            Value::Number(n) if n.abs() >= 1e21 => write!(f, "{n:e}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Nested(d) => write!(f, "{d}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

/// Non-finite numbers convert to [`Value::Null`].
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Value::Number(value)
        } else {
            Value::Null
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::from(f64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<Declaration> for Value {
    fn from(value: Declaration) -> Self {
        Value::Nested(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
