use serde_json::Value;

use crate::errors::{BookboonError, Result};

/// A decoded JSON response body.
///
/// The API does not publish a fixed schema, so the body is kept as a generic
/// JSON value. The accessors fail explicitly on missing or mismatched fields
/// instead of yielding nulls.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiValue(Value);

impl ApiValue {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the underlying JSON value.
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Look up a field on a JSON object.
    pub fn field(&self, name: &str) -> Result<&Value> {
        self.0
            .get(name)
            .ok_or_else(|| BookboonError::MissingField(name.to_string()))
    }

    /// Look up a field and require it to be a string.
    pub fn str_field(&self, name: &str) -> Result<&str> {
        self.field(name)?
            .as_str()
            .ok_or_else(|| BookboonError::WrongType {
                field: name.to_string(),
                expected: "string",
            })
    }

    /// Look up a field and require it to be a boolean.
    pub fn bool_field(&self, name: &str) -> Result<bool> {
        self.field(name)?
            .as_bool()
            .ok_or_else(|| BookboonError::WrongType {
                field: name.to_string(),
                expected: "boolean",
            })
    }

    /// Look up a field and require it to be an integer.
    pub fn i64_field(&self, name: &str) -> Result<i64> {
        self.field(name)?
            .as_i64()
            .ok_or_else(|| BookboonError::WrongType {
                field: name.to_string(),
                expected: "integer",
            })
    }

    /// Index into a JSON array.
    pub fn index(&self, i: usize) -> Result<&Value> {
        self.0
            .get(i)
            .ok_or_else(|| BookboonError::MissingField(format!("[{}]", i)))
    }

    /// View the value as a JSON array.
    pub fn as_array(&self) -> Result<&Vec<Value>> {
        self.0.as_array().ok_or_else(|| BookboonError::WrongType {
            field: "$".to_string(),
            expected: "array",
        })
    }

    /// View the value as a JSON object.
    pub fn as_object(&self) -> Result<&serde_json::Map<String, Value>> {
        self.0.as_object().ok_or_else(|| BookboonError::WrongType {
            field: "$".to_string(),
            expected: "object",
        })
    }
}
