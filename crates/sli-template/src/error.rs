//! Error types for sli-template operations.

use thiserror::Error;

/// The error type for parsing and rendering query templates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A `{{` was opened but never closed.
    #[error("unterminated placeholder starting at byte {offset}")]
    Unterminated {
        /// Byte offset of the opening `{{`.
        offset: usize,
    },

    /// A `{{ ... }}` block that is not of the form `{{.key}}`.
    #[error("invalid placeholder {{{{{body}}}}} at byte {offset}")]
    InvalidPlaceholder {
        /// Byte offset of the opening `{{`.
        offset: usize,
        /// The text between the braces.
        body: String,
    },

    /// A placeholder was referenced but no value was supplied for it.
    #[error("map has no entry for key \"{key}\"")]
    MissingValue {
        /// The unresolved placeholder key.
        key: String,
    },
}

/// A specialized Result type for sli-template operations.
pub type Result<T> = std::result::Result<T, Error>;
