//! Error types for node decoding

/// Error type for node and codec operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NtError {
    /// Backslash escape that does not decode to a code point
    #[error("Malformed escape sequence at position {position}: {message}")]
    MalformedEscape { position: usize, message: String },

    /// Empty string where a serialized term was expected
    #[error("Empty N-Triples term")]
    EmptyTerm,

    /// Token whose leading character names no known term kind
    #[error("Unrecognized N-Triples term: {0}")]
    UnknownTerm(String),
}

/// Result type for node operations
pub type Result<T> = std::result::Result<T, NtError>;

impl NtError {
    /// Create a malformed escape error
    pub fn malformed_escape(position: usize, message: impl Into<String>) -> Self {
        Self::MalformedEscape {
            position,
            message: message.into(),
        }
    }
}
