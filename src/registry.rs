//! Static registry of record types
//!
//! The explicit mapping from type identifier to schema and storage
//! collection. A persistence layer resolves collections through this
//! registry instead of re-deriving names by string manipulation.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::document::Document;
use crate::error::Result;
use crate::records::{Lead, Product, User};
use crate::schema::RecordSchema;

/// Identifier for a registered record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    User,
    Product,
    Lead,
}

impl RecordKind {
    /// Every registered record type
    pub const ALL: [RecordKind; 3] = [RecordKind::User, RecordKind::Product, RecordKind::Lead];

    /// The schema for this record type
    pub fn schema(&self) -> &'static RecordSchema {
        match self {
            RecordKind::User => &User::SCHEMA,
            RecordKind::Product => &Product::SCHEMA,
            RecordKind::Lead => &Lead::SCHEMA,
        }
    }

    /// Record type name (e.g. "User")
    pub fn name(&self) -> &'static str {
        self.schema().name
    }

    /// Storage collection name, the lowercased type name
    pub fn collection(&self) -> &'static str {
        self.schema().collection
    }

    /// Reverse lookup from a collection name
    pub fn from_collection(collection: &str) -> Option<RecordKind> {
        Self::ALL.into_iter().find(|k| k.collection() == collection)
    }

    /// Validate a raw field mapping against this record type's schema
    pub fn validate(&self, raw: &Map<String, Value>) -> Result<Document> {
        self.schema().validate(raw)
    }

    /// Validate a raw JSON value, which must be an object
    pub fn validate_value(&self, raw: &Value) -> Result<Document> {
        self.schema().validate_value(raw)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
