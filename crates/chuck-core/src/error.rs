//! # Error Types
//!
//! Errors raised by the core data model. The only failure the model itself
//! produces is a record or identifier that does not validate; storage and
//! transport errors belong to the crates that do I/O.

use thiserror::Error;

/// A value that does not satisfy the joke record schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field is present but has the wrong JSON type.
    #[error("field `{field}` must be a {expected}")]
    WrongType {
        /// Name of the offending field.
        field: &'static str,
        /// The JSON type that was expected.
        expected: &'static str,
    },

    /// An identifier is empty or whitespace only.
    #[error("joke id must not be empty")]
    EmptyId,

    /// The payload is not a JSON object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}
