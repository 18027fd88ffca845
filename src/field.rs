//! Field declarations and per-field validation
//!
//! Each record type declares an ordered list of [`FieldSpec`] tuples:
//! name, type, required flag, default, constraint. Validation of a raw
//! value runs type coercion first, then the constraint predicate.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, SchemaError};

/// Pragmatic RFC-5322-style email pattern: local part, `@`, dotted domain
const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).unwrap())
}

/// Declared type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Whole number (JSON integers, or floats with no fractional part)
    Integer,
    /// Any JSON number
    Number,
    /// Boolean, strict (no truthy coercion)
    Boolean,
}

impl FieldType {
    /// Name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
        }
    }

    /// Coerce a raw JSON value to this type, or fail naming the field.
    pub(crate) fn coerce(&self, field: &str, raw: &Value) -> Result<Value> {
        let coerced = match self {
            FieldType::String => raw.as_str().map(|s| Value::String(s.to_string())),
            FieldType::Integer => integral(raw).map(Value::from),
            FieldType::Number => raw.as_f64().map(Value::from),
            FieldType::Boolean => raw.as_bool().map(Value::Bool),
        };
        coerced.ok_or_else(|| SchemaError::TypeMismatch {
            field: field.to_string(),
            expected: self.name().to_string(),
            found: json_type_name(raw).to_string(),
        })
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Extract an integer, accepting floats that carry a whole value
fn integral(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
            Some(f as i64)
        }
        _ => None,
    }
}

/// JSON type name for error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Default applied when an optional field is omitted from the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    /// No default; the field stays absent from the document
    None,
    Bool(bool),
    Str(&'static str),
}

impl FieldDefault {
    /// Materialize the default as a JSON value, if one is declared
    pub fn to_value(self) -> Option<Value> {
        match self {
            FieldDefault::None => None,
            FieldDefault::Bool(b) => Some(Value::Bool(b)),
            FieldDefault::Str(s) => Some(Value::String(s.to_string())),
        }
    }
}

/// Constraint checked after a field's value has been coerced
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// String must not be empty
    NonEmpty,
    /// Integer must lie in the inclusive range
    IntRange { min: i64, max: i64 },
    /// Number must be at least the given value
    MinNumber(f64),
    /// String must be a syntactically valid email address
    Email,
}

impl Constraint {
    /// Human-readable rule text, carried in constraint-violation errors
    pub fn rule(&self) -> String {
        match self {
            Constraint::NonEmpty => "must not be empty".to_string(),
            Constraint::IntRange { min, max } => format!("must be between {} and {}", min, max),
            Constraint::MinNumber(min) => format!("must be at least {}", min),
            Constraint::Email => "must be a valid email address".to_string(),
        }
    }

    /// Check a coerced value, or fail naming the field and the rule.
    pub(crate) fn check(&self, field: &str, value: &Value) -> Result<()> {
        let ok = match self {
            Constraint::NonEmpty => value.as_str().is_some_and(|s| !s.is_empty()),
            Constraint::IntRange { min, max } => {
                value.as_i64().is_some_and(|i| (*min..=*max).contains(&i))
            }
            Constraint::MinNumber(min) => value.as_f64().is_some_and(|f| f >= *min),
            Constraint::Email => value.as_str().is_some_and(|s| email_regex().is_match(s)),
        };
        if ok {
            Ok(())
        } else {
            Err(SchemaError::ConstraintViolation {
                field: field.to_string(),
                rule: self.rule(),
            })
        }
    }
}

/// A single field declaration within a record schema
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name as it appears in raw input and stored documents
    pub name: &'static str,
    /// Declared type
    pub ty: FieldType,
    /// Whether the field must be present in the input
    pub required: bool,
    /// Default for an omitted optional field
    pub default: FieldDefault,
    /// Optional constraint, checked after coercion
    pub constraint: Option<Constraint>,
}

impl FieldSpec {
    /// Validate a raw value known to be present: coerce, then constrain.
    pub(crate) fn validate_present(&self, raw: &Value) -> Result<Value> {
        let coerced = self.ty.coerce(self.name, raw)?;
        if let Some(constraint) = self.constraint {
            constraint.check(self.name, &coerced)?;
        }
        Ok(coerced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_coercion() {
        assert_eq!(
            FieldType::Integer.coerce("age", &json!(42)).unwrap(),
            json!(42)
        );
        // Whole-valued floats are accepted; form bodies round-trip through them
        assert_eq!(
            FieldType::Integer.coerce("age", &json!(42.0)).unwrap(),
            json!(42)
        );

        let err = FieldType::Integer.coerce("age", &json!(42.5)).unwrap_err();
        match err {
            SchemaError::TypeMismatch { field, expected, found } => {
                assert_eq!(field, "age");
                assert_eq!(expected, "integer");
                assert_eq!(found, "number");
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }

        assert!(FieldType::Integer.coerce("age", &json!("42")).is_err());
    }

    #[test]
    fn test_strict_string_and_boolean() {
        assert!(FieldType::String.coerce("name", &json!("Ana")).is_ok());
        assert!(FieldType::String.coerce("name", &json!(7)).is_err());
        assert!(FieldType::Boolean.coerce("is_active", &json!(true)).is_ok());
        assert!(FieldType::Boolean.coerce("is_active", &json!("true")).is_err());
    }

    #[test]
    fn test_number_accepts_any_json_number() {
        assert_eq!(
            FieldType::Number.coerce("price", &json!(3)).unwrap(),
            json!(3.0)
        );
        assert!(FieldType::Number.coerce("price", &json!(9.99)).is_ok());
        assert!(FieldType::Number.coerce("price", &json!(null)).is_err());
    }

    #[test]
    fn test_int_range_constraint() {
        let range = Constraint::IntRange { min: 0, max: 120 };
        assert!(range.check("age", &json!(0)).is_ok());
        assert!(range.check("age", &json!(120)).is_ok());

        let err = range.check("age", &json!(121)).unwrap_err();
        assert_eq!(
            err,
            SchemaError::ConstraintViolation {
                field: "age".to_string(),
                rule: "must be between 0 and 120".to_string(),
            }
        );
        assert!(range.check("age", &json!(-1)).is_err());
    }

    #[test]
    fn test_min_number_constraint() {
        let min = Constraint::MinNumber(0.0);
        assert!(min.check("price", &json!(0.0)).is_ok());
        assert!(min.check("price", &json!(-0.01)).is_err());
    }

    #[test]
    fn test_non_empty_constraint() {
        assert!(Constraint::NonEmpty.check("name", &json!("Ana")).is_ok());
        assert!(Constraint::NonEmpty.check("name", &json!("")).is_err());
    }

    #[test]
    fn test_email_syntax() {
        for valid in ["a@b.com", "bo@x.com", "first.last+tag@sub.example.org"] {
            assert!(
                Constraint::Email.check("email", &json!(valid)).is_ok(),
                "expected {} to be accepted",
                valid
            );
        }
        for invalid in ["not-an-email", "@example.com", "a@b", "a@.com", "a b@c.com"] {
            assert!(
                Constraint::Email.check("email", &json!(invalid)).is_err(),
                "expected {} to be rejected",
                invalid
            );
        }
    }

    #[test]
    fn test_defaults_materialize() {
        assert_eq!(FieldDefault::None.to_value(), None);
        assert_eq!(FieldDefault::Bool(true).to_value(), Some(json!(true)));
        assert_eq!(
            FieldDefault::Str("website").to_value(),
            Some(json!("website"))
        );
    }
}
