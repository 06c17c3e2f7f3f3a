//! Error types for the style compiler.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while compiling or injecting styles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A pseudo-selector block was declared inside another one.
    #[error("Cannot declare style with modifier ({inner}) in a modifier ({outer})")]
    InvalidNesting { outer: String, inner: String },

    /// Unrecognized injection mode name.
    #[error("Invalid injection mode '{0}': expected inject, noop or inline")]
    InvalidMode(String),

    /// Capture (de)serialization failed.
    #[error("Capture serialization failed: {0}")]
    Serialization(String),

    /// The rule sink failed.
    #[error(transparent)]
    Sheet(#[from] astyle_core::Error),
}

impl Error {
    /// Create a nesting error.
    pub fn invalid_nesting(outer: impl Into<String>, inner: impl Into<String>) -> Self {
        Self::InvalidNesting {
            outer: outer.into(),
            inner: inner.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
