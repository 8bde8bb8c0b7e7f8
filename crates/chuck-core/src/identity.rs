//! # Joke Identifier
//!
//! Newtype wrapper for the API-assigned joke id. Keeps ids from being
//! confused with joke text, which is also a bare string on the wire.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier of a joke, as assigned by the remote API.
///
/// Serializes as a plain JSON string so the persisted layout stays
/// `{"id": "...", "value": "..."}`. Deserialization goes through
/// [`JokeId::new`], so an empty id never enters the model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JokeId(String);

impl JokeId {
    /// Create a validated joke id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] if `id` is empty or whitespace only.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Access the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for JokeId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for JokeId {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<JokeId> for String {
    fn from(id: JokeId) -> Self {
        id.0
    }
}

impl AsRef<str> for JokeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
