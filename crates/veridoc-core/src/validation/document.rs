//! Top-level document validation
//!
//! Iterates the schema's fields in declaration order, applies the
//! required/presence gate, then dispatches each present field to the array
//! or scalar validator. Failures accumulate across fields; only the
//! Required and Type gates are fail-fast, and only per field.
//!
//! Copyright (c) 2025 Veridoc Team
//! Licensed under the Apache-2.0 license

use crate::schema::{DocumentSchema, FieldType};
use crate::validation::error::ValidationResult;
use crate::validation::path::FieldPath;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::array::validate_array_field;
use super::object::{is_empty_value, required_error};
use super::scalar::validate_scalar;

/// A field counts as missing when it is absent, null, an empty string, or,
/// for array-typed fields only, an empty array. An empty array on a
/// scalar-typed field is a present wrong-typed value and must reach the
/// type check.
fn is_missing(value: Option<&Value>, field_type: &FieldType) -> bool {
    match value {
        None => true,
        Some(Value::Array(items)) => {
            matches!(field_type, FieldType::Array { .. }) && items.is_empty()
        }
        Some(v) => is_empty_value(v),
    }
}

/// Validate a document against a schema.
///
/// Pure over its inputs and never fails: the outcome, including every
/// violation found, is carried in the returned [`ValidationResult`].
pub fn validate_document(data: &Map<String, Value>, schema: &DocumentSchema) -> ValidationResult {
    debug!(fields = schema.fields.len(), "validating document");
    let mut errors = Vec::new();

    for field in &schema.fields {
        let value = data.get(&field.name);
        if is_missing(value, &field.schema.field_type) {
            if field.schema.required {
                errors.push(required_error(&FieldPath::field(&field.name), &field.name));
            }
            continue;
        }
        let Some(value) = value else {
            continue;
        };

        match &field.schema.field_type {
            FieldType::Array { .. } => {
                errors.extend(validate_array_field(&field.name, value, &field.schema));
            }
            field_type => {
                errors.extend(validate_scalar(
                    &FieldPath::field(&field.name),
                    value,
                    field_type,
                ));
            }
        }
    }

    trace!(errors = errors.len(), "document validation finished");
    ValidationResult::from_errors(errors)
}
