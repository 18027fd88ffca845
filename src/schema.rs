//! Record schemas and the validation fold

use serde_json::{Map, Value};

use crate::document::Document;
use crate::error::{Result, SchemaError};
use crate::field::{json_type_name, FieldSpec};

/// A named record type: its storage collection and ordered field list.
///
/// Collection names follow the platform convention of lowercasing the
/// record type name (`User` -> "user").
#[derive(Debug, Clone)]
pub struct RecordSchema {
    /// Record type name (e.g. "User")
    pub name: &'static str,
    /// Document-store collection holding records of this type
    pub collection: &'static str,
    /// Field declarations, validated in order
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Validate a raw field mapping against this schema.
    ///
    /// Fields are checked in declaration order: presence, then type
    /// coercion, then constraints. The first failure rejects the whole
    /// input; there is no partial construction. Omitted optionals take
    /// their default, JSON null counts as omitted, and unknown keys are
    /// dropped. Pure computation: no I/O, no logging, no shared state.
    pub fn validate(&self, raw: &Map<String, Value>) -> Result<Document> {
        let mut fields = Map::new();
        for spec in self.fields {
            match raw.get(spec.name).filter(|v| !v.is_null()) {
                Some(value) => {
                    fields.insert(spec.name.to_string(), spec.validate_present(value)?);
                }
                None if spec.required => {
                    return Err(SchemaError::MissingField {
                        field: spec.name.to_string(),
                    });
                }
                None => {
                    if let Some(default) = spec.default.to_value() {
                        fields.insert(spec.name.to_string(), default);
                    }
                }
            }
        }
        Ok(Document::new(fields))
    }

    /// Validate a raw JSON value, which must be an object.
    ///
    /// A non-object input is reported as a type mismatch on the document
    /// root, named `$`.
    pub fn validate_value(&self, raw: &Value) -> Result<Document> {
        match raw.as_object() {
            Some(map) => self.validate(map),
            None => Err(SchemaError::TypeMismatch {
                field: "$".to_string(),
                expected: "object".to_string(),
                found: json_type_name(raw).to_string(),
            }),
        }
    }
}
