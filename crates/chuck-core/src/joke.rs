//! # Joke Record
//!
//! A joke is an API-assigned id plus display text. The remote API returns
//! more than that (`icon_url`, `url`, `categories`, timestamps); those
//! fields are kept in [`Joke::extra`] and written back verbatim, so the
//! persisted objects look exactly like what the API sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::identity::JokeId;

/// One joke record. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joke {
    /// API-assigned identifier, unique within a collection.
    pub id: JokeId,
    /// Display text.
    pub value: String,
    /// Passthrough fields from the API, preserved on save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Joke {
    /// Build a joke with no passthrough fields.
    pub fn new(id: JokeId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            extra: Map::new(),
        }
    }

    /// Validate an untrusted JSON payload and turn it into a joke.
    ///
    /// The payload must be an object with a non-empty string `id` and a
    /// string `value`. Every other field is kept as passthrough.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first field that does not
    /// match the schema.
    pub fn from_json(payload: Value) -> Result<Self, ValidationError> {
        let mut fields = match payload {
            Value::Object(map) => map,
            other => return Err(ValidationError::NotAnObject(json_type_name(&other))),
        };

        let id = match fields.remove("id") {
            Some(Value::String(s)) => JokeId::new(s)?,
            Some(_) => {
                return Err(ValidationError::WrongType {
                    field: "id",
                    expected: "string",
                })
            }
            None => return Err(ValidationError::MissingField("id")),
        };

        let value = match fields.remove("value") {
            Some(Value::String(s)) => s,
            Some(_) => {
                return Err(ValidationError::WrongType {
                    field: "value",
                    expected: "string",
                })
            }
            None => return Err(ValidationError::MissingField("value")),
        };

        Ok(Self {
            id,
            value,
            extra: fields,
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
