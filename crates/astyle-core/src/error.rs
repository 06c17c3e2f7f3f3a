//! Error types for rule sinks.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by rule sinks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A live document is present but its stylesheet could not be obtained.
    #[error("Stylesheet unavailable: {0}")]
    SinkUnavailable(String),

    /// The host stylesheet rejected a rule.
    #[error("Failed to insert rule '{rule}': {message}")]
    InsertRule { rule: String, message: String },
}

impl Error {
    /// Create a sink-unavailable error.
    pub fn sink_unavailable(message: impl Into<String>) -> Self {
        Self::SinkUnavailable(message.into())
    }

    /// Create a rule insertion error.
    pub fn insert_rule(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InsertRule {
            rule: rule.into(),
            message: message.into(),
        }
    }
}
