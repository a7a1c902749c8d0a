use super::{
    validation::{deserialize_with_path, validate_against_schema},
    PlannerDocument,
};
use crate::error::Result;
use serde_json::Value;
use tracing::debug;

/// Validation strategies for incoming documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validator {
    /// Fast validation using serde
    #[default]
    SerdeFirst,
    /// Check against the document's JSON Schema before deserializing
    Strict,
}

impl Validator {
    pub fn strict(strict: bool) -> Self {
        if strict {
            Validator::Strict
        } else {
            Validator::SerdeFirst
        }
    }

    /// Validate and deserialize a document into type T
    pub fn parse<T: PlannerDocument>(&self, value: Value) -> Result<T> {
        if let Validator::Strict = self {
            let schema = T::schema()?;
            debug!(document = T::NAME, "checking document against schema");
            validate_against_schema(schema, &value)?;
        }
        deserialize_with_path(T::NAME, value)
    }

    /// Parse JSON text, then validate it as [`Validator::parse`] does
    pub fn parse_str<T: PlannerDocument>(&self, text: &str) -> Result<T> {
        let value: Value = serde_json::from_str(text)?;
        self.parse(value)
    }
}
