//! The record types stored in the document store
//!
//! Each type carries a `SCHEMA` constant declaring its fields and the
//! collection that holds it (the lowercased type name). Instances are
//! immutable value objects: the only way to obtain one is the validating
//! constructor, and there are no mutators. `Serialize` is provided for
//! the persistence hand-off; `Deserialize` deliberately is not, since it
//! would bypass validation.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::document::Document;
use crate::error::Result;
use crate::field::{Constraint, FieldDefault, FieldSpec, FieldType};
use crate::schema::RecordSchema;

const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        ty: FieldType::String,
        required: true,
        default: FieldDefault::None,
        constraint: Some(Constraint::NonEmpty),
    },
    // Plain string, no syntax check. Lead.email is strict; the asymmetry
    // is long-standing and callers rely on it staying unchecked here.
    FieldSpec {
        name: "email",
        ty: FieldType::String,
        required: true,
        default: FieldDefault::None,
        constraint: None,
    },
    FieldSpec {
        name: "address",
        ty: FieldType::String,
        required: true,
        default: FieldDefault::None,
        constraint: Some(Constraint::NonEmpty),
    },
    FieldSpec {
        name: "age",
        ty: FieldType::Integer,
        required: false,
        default: FieldDefault::None,
        constraint: Some(Constraint::IntRange { min: 0, max: 120 }),
    },
    FieldSpec {
        name: "is_active",
        ty: FieldType::Boolean,
        required: false,
        default: FieldDefault::Bool(true),
        constraint: None,
    },
];

/// A user account, stored in the "user" collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    name: String,
    email: String,
    address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<i64>,
    is_active: bool,
}

impl User {
    /// Field declarations for this record type
    pub const SCHEMA: RecordSchema = RecordSchema {
        name: "User",
        collection: "user",
        fields: USER_FIELDS,
    };

    /// Construct a user from a raw field mapping, validating every field
    pub fn from_raw(raw: &Map<String, Value>) -> Result<Self> {
        Self::bind(Self::SCHEMA.validate(raw)?)
    }

    /// Construct from a raw JSON value, which must be an object
    pub fn from_value(raw: &Value) -> Result<Self> {
        Self::bind(Self::SCHEMA.validate_value(raw)?)
    }

    fn bind(doc: Document) -> Result<Self> {
        Ok(Self {
            name: doc.string("name")?,
            email: doc.string("email")?,
            address: doc.string("address")?,
            age: doc.opt_integer("age")?,
            is_active: doc.boolean("is_active")?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn age(&self) -> Option<i64> {
        self.age
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

const PRODUCT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        ty: FieldType::String,
        required: true,
        default: FieldDefault::None,
        constraint: Some(Constraint::NonEmpty),
    },
    FieldSpec {
        name: "description",
        ty: FieldType::String,
        required: false,
        default: FieldDefault::None,
        constraint: None,
    },
    FieldSpec {
        name: "price",
        ty: FieldType::Number,
        required: true,
        default: FieldDefault::None,
        constraint: Some(Constraint::MinNumber(0.0)),
    },
    FieldSpec {
        name: "category",
        ty: FieldType::String,
        required: true,
        default: FieldDefault::None,
        constraint: Some(Constraint::NonEmpty),
    },
    FieldSpec {
        name: "in_stock",
        ty: FieldType::Boolean,
        required: false,
        default: FieldDefault::Bool(true),
        constraint: None,
    },
];

/// A catalog product, stored in the "product" collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    price: f64,
    category: String,
    in_stock: bool,
}

impl Product {
    /// Field declarations for this record type
    pub const SCHEMA: RecordSchema = RecordSchema {
        name: "Product",
        collection: "product",
        fields: PRODUCT_FIELDS,
    };

    /// Construct a product from a raw field mapping, validating every field
    pub fn from_raw(raw: &Map<String, Value>) -> Result<Self> {
        Self::bind(Self::SCHEMA.validate(raw)?)
    }

    /// Construct from a raw JSON value, which must be an object
    pub fn from_value(raw: &Value) -> Result<Self> {
        Self::bind(Self::SCHEMA.validate_value(raw)?)
    }

    fn bind(doc: Document) -> Result<Self> {
        Ok(Self {
            title: doc.string("title")?,
            description: doc.opt_string("description")?,
            price: doc.number("price")?,
            category: doc.string("category")?,
            in_stock: doc.boolean("in_stock")?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }
}

const LEAD_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "parent_name",
        ty: FieldType::String,
        required: true,
        default: FieldDefault::None,
        constraint: Some(Constraint::NonEmpty),
    },
    FieldSpec {
        name: "email",
        ty: FieldType::String,
        required: true,
        default: FieldDefault::None,
        constraint: Some(Constraint::Email),
    },
    FieldSpec {
        name: "child_name",
        ty: FieldType::String,
        required: false,
        default: FieldDefault::None,
        constraint: None,
    },
    FieldSpec {
        name: "child_age",
        ty: FieldType::Integer,
        required: false,
        default: FieldDefault::None,
        constraint: Some(Constraint::IntRange { min: 0, max: 18 }),
    },
    // Free-form tag; the signup form suggests Waitlist, Demo,
    // Early Access, Educator
    FieldSpec {
        name: "interest",
        ty: FieldType::String,
        required: false,
        default: FieldDefault::None,
        constraint: None,
    },
    FieldSpec {
        name: "message",
        ty: FieldType::String,
        required: false,
        default: FieldDefault::None,
        constraint: None,
    },
    FieldSpec {
        name: "source",
        ty: FieldType::String,
        required: false,
        default: FieldDefault::Str("website"),
        constraint: None,
    },
];

/// A marketing signup or inquiry, stored in the "lead" collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    parent_name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    child_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    child_age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    source: String,
}

impl Lead {
    /// Field declarations for this record type
    pub const SCHEMA: RecordSchema = RecordSchema {
        name: "Lead",
        collection: "lead",
        fields: LEAD_FIELDS,
    };

    /// Construct a lead from a raw field mapping, validating every field
    pub fn from_raw(raw: &Map<String, Value>) -> Result<Self> {
        Self::bind(Self::SCHEMA.validate(raw)?)
    }

    /// Construct from a raw JSON value, which must be an object
    pub fn from_value(raw: &Value) -> Result<Self> {
        Self::bind(Self::SCHEMA.validate_value(raw)?)
    }

    fn bind(doc: Document) -> Result<Self> {
        Ok(Self {
            parent_name: doc.string("parent_name")?,
            email: doc.string("email")?,
            child_name: doc.opt_string("child_name")?,
            child_age: doc.opt_integer("child_age")?,
            interest: doc.opt_string("interest")?,
            message: doc.opt_string("message")?,
            source: doc.string("source")?,
        })
    }

    pub fn parent_name(&self) -> &str {
        &self.parent_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn child_name(&self) -> Option<&str> {
        self.child_name.as_deref()
    }

    pub fn child_age(&self) -> Option<i64> {
        self.child_age
    }

    pub fn interest(&self) -> Option<&str> {
        self.interest.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Acquisition source tag; "website" unless the input says otherwise
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_user_construction() {
        let user = User::from_raw(&raw(json!({
            "name": "Ana",
            "email": "a@x.com",
            "address": "1 St",
            "age": 34,
            "is_active": false
        })))
        .unwrap();
        assert_eq!(user.name(), "Ana");
        assert_eq!(user.age(), Some(34));
        assert!(!user.is_active());
    }

    #[test]
    fn test_user_email_is_not_syntax_checked() {
        let user = User::from_raw(&raw(json!({
            "name": "Ana",
            "email": "not-an-email",
            "address": "1 St"
        })))
        .unwrap();
        assert_eq!(user.email(), "not-an-email");
    }

    #[test]
    fn test_product_construction() {
        let product = Product::from_raw(&raw(json!({
            "title": "Pen",
            "price": 1.5,
            "category": "Office"
        })))
        .unwrap();
        assert_eq!(product.price(), 1.5);
        assert_eq!(product.description(), None);
        assert!(product.in_stock());
    }

    #[test]
    fn test_lead_email_is_strict() {
        let err = Lead::from_raw(&raw(json!({
            "parent_name": "Bo",
            "email": "not-an-email"
        })))
        .unwrap_err();
        match err {
            SchemaError::ConstraintViolation { field, .. } => assert_eq!(field, "email"),
            other => panic!("expected ConstraintViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_lead_source_defaults_to_website() {
        let lead = Lead::from_raw(&raw(json!({
            "parent_name": "Bo",
            "email": "bo@x.com"
        })))
        .unwrap();
        assert_eq!(lead.source(), "website");
        assert_eq!(lead.child_name(), None);
    }

    #[test]
    fn test_absent_optionals_stay_out_of_serialized_documents() {
        let user = User::from_raw(&raw(json!({
            "name": "Ana",
            "email": "a@x.com",
            "address": "1 St"
        })))
        .unwrap();
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("age").is_none());
        assert_eq!(value["is_active"], json!(true));
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        let err = User::from_value(&json!("nope")).unwrap_err();
        assert!(matches!(err, SchemaError::TypeMismatch { .. }));
    }
}
