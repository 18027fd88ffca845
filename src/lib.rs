//! Storybook document schemas
//!
//! Validated record schemas for the collections of the storybook
//! platform's document store. Each record type declares an ordered list
//! of fields with types, required flags, defaults, and constraints;
//! constructing a record from untrusted input (a parsed JSON body, a
//! form submission) checks every field and either yields an immutable
//! value or rejects the input as a unit with an error naming the
//! failing field.
//!
//! Collection names are the lowercased record type names:
//!
//! - `User` -> "user"
//! - `Product` -> "product"
//! - `Lead` -> "lead"
//!
//! Validation is a pure, synchronous computation: no I/O, no logging,
//! no shared state. Calls are independent and safe to make from any
//! number of threads.

pub mod document;
pub mod error;
pub mod field;
pub mod records;
pub mod registry;
pub mod schema;

pub use document::Document;
pub use error::{Result, SchemaError};
pub use field::{Constraint, FieldDefault, FieldSpec, FieldType};
pub use records::{Lead, Product, User};
pub use registry::RecordKind;
pub use schema::RecordSchema;
