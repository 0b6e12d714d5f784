//! Per-field extraction from a parsed config record.
//!
//! Fields are pulled out one at a time so that a missing or mistyped value
//! is reported with its wire name instead of a generic parse error.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use super::ConfigError;

pub(crate) struct FieldReader {
    fields: Map<String, Value>,
}

impl FieldReader {
    pub(crate) fn new(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ConfigError::validation(
                "<root>",
                format!("expected a record, found {}", kind(&other)),
            )),
        }
    }

    /// A field that must be present and non-null.
    pub(crate) fn required<T: DeserializeOwned>(&mut self, name: &str) -> Result<T, ConfigError> {
        match self.fields.remove(name) {
            None => Err(ConfigError::validation(name, "field is required")),
            Some(Value::Null) => Err(ConfigError::validation(name, "field must not be null")),
            Some(value) => decode(name, value),
        }
    }

    /// A field that must be declared but may be null.
    pub(crate) fn nullable<T: DeserializeOwned>(
        &mut self,
        name: &str,
    ) -> Result<Option<T>, ConfigError> {
        match self.fields.remove(name) {
            None => Err(ConfigError::validation(
                name,
                "field must be declared (use null for the built-in default)",
            )),
            Some(Value::Null) => Ok(None),
            Some(value) => decode(name, value).map(Some),
        }
    }

    /// Consumes the reader, logging every field nobody asked for.
    pub(crate) fn finish(self) {
        for name in self.fields.keys() {
            warn!(field = %name, "ignoring unknown deployment config field");
        }
    }
}

fn decode<T: DeserializeOwned>(name: &str, value: Value) -> Result<T, ConfigError> {
    serde_json::from_value(value).map_err(|e| ConfigError::validation(name, e.to_string()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a record",
    }
}
