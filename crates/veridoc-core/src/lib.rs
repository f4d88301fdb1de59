//! Veridoc Core - schema-driven document validation engine
//!
//! This crate is the validation engine behind a document QA workflow: before
//! a corrected document is accepted, every field is checked against a
//! declarative schema and every violation is reported with the context a
//! human reviewer needs (field path, array index, nested property, reason,
//! suggestion).
//!
//! ## Features
//!
//! - **Typed schemas**: fields are described by an exhaustive
//!   [`FieldType`](schema::FieldType) union with per-type constraints
//!   (length, range, pattern, required/optional)
//! - **Path-addressed errors**: violations carry a `field[2].quantity`-style
//!   path rendered from structured segments
//! - **Deterministic ordering**: errors follow field declaration order, then
//!   array index order, then property declaration order
//! - **Default synthesis**: template rows for UI "add row" actions
//! - **Input normalization**: folds tabular-tooling sentinels and widened
//!   floats back into canonical primitives before validation
//!
//! ## Quick Start
//!
//! ```rust
//! use veridoc_core::{
//!     validate_document, DocumentSchema, FieldDef, FieldSchema, FieldType,
//! };
//! use serde_json::json;
//!
//! let schema = DocumentSchema::new(vec![
//!     FieldDef::new("supplier_name", FieldSchema::required(FieldType::string())),
//!     FieldDef::new("policy_number", FieldSchema::optional(FieldType::string())),
//! ]);
//!
//! let data = json!({"policy_number": "POL1"});
//! let result = validate_document(data.as_object().unwrap(), &schema);
//!
//! assert!(!result.is_valid);
//! assert_eq!(result.errors.len(), 1);
//! assert_eq!(result.errors[0].field_path, "supplier_name");
//! ```
//!
//! ## Validation policy
//!
//! The engine never panics and never returns `Err`: every entry point
//! accumulates violations into the result it returns. Within one field, the
//! required/presence gate and the type check are fail-fast; independent
//! constraint checks on a type-correct value all run and all report.
//! Validators are pure functions over borrowed inputs and hold no state
//! between calls, so they can be invoked concurrently without coordination.
//!
//! Copyright (c) 2025 Veridoc Team
//! Licensed under the Apache-2.0 license

pub mod defaults;
pub mod normalize;
pub mod schema;
pub mod validation;

// Re-export commonly used types for convenience
pub use defaults::{default_for, default_object};
pub use normalize::normalize;
pub use schema::{DocumentSchema, FieldDef, FieldSchema, FieldType, PropertySchema};
pub use validation::{
    validate_array_field, validate_document, validate_documents_batch, validate_object_array,
    validate_object_item, validate_scalar, validate_scalar_array, validate_scalar_messages,
    ErrorKind, FieldPath, PathSegment, ValidationConfig, ValidationError, ValidationResult,
};
