//! Normalized documents produced by a successful validation

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, SchemaError};
use crate::field::{json_type_name, FieldType};

/// A validated field map, normalized for the document store.
///
/// Every present field has been coerced to its declared type and has
/// passed its constraints; omitted optionals carry their default or are
/// absent. The typed accessors never re-run validation, they only read
/// out what the fold already guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    pub(crate) fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw access to a field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Consume the document, yielding the underlying field map
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Read a required string field
    pub fn string(&self, field: &str) -> Result<String> {
        match self.0.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(mismatch(field, FieldType::String, other)),
            None => Err(missing(field)),
        }
    }

    /// Read an optional string field
    pub fn opt_string(&self, field: &str) -> Result<Option<String>> {
        match self.0.get(field) {
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(mismatch(field, FieldType::String, other)),
            None => Ok(None),
        }
    }

    /// Read an optional integer field
    pub fn opt_integer(&self, field: &str) -> Result<Option<i64>> {
        match self.0.get(field) {
            Some(value) => match value.as_i64() {
                Some(i) => Ok(Some(i)),
                None => Err(mismatch(field, FieldType::Integer, value)),
            },
            None => Ok(None),
        }
    }

    /// Read a required number field
    pub fn number(&self, field: &str) -> Result<f64> {
        match self.0.get(field) {
            Some(value) => value
                .as_f64()
                .ok_or_else(|| mismatch(field, FieldType::Number, value)),
            None => Err(missing(field)),
        }
    }

    /// Read a required boolean field
    pub fn boolean(&self, field: &str) -> Result<bool> {
        match self.0.get(field) {
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(mismatch(field, FieldType::Boolean, other)),
            None => Err(missing(field)),
        }
    }
}

fn missing(field: &str) -> SchemaError {
    SchemaError::MissingField {
        field: field.to_string(),
    }
}

fn mismatch(field: &str, expected: FieldType, found: &Value) -> SchemaError {
    SchemaError::TypeMismatch {
        field: field.to_string(),
        expected: expected.name().to_string(),
        found: json_type_name(found).to_string(),
    }
}
