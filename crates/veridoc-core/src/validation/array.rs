//! Array field validation
//!
//! One algorithm, two element kinds: scalar arrays delegate each element to
//! the scalar validator, object arrays to the object-item validator. The
//! comprehensive entry point [`validate_array_field`] also guards against a
//! non-array value reaching an array-typed field.
//!
//! Copyright (c) 2025 Veridoc Team
//! Licensed under the Apache-2.0 license

use crate::schema::{FieldSchema, FieldType, PropertySchema};
use crate::validation::error::{ErrorKind, ValidationError};
use crate::validation::path::FieldPath;
use serde_json::Value;

use super::object::validate_object_item;
use super::scalar::validate_scalar;

/// Validate every element of a scalar array. An empty array yields no
/// errors; required-but-empty is the document validator's concern.
pub fn validate_scalar_array(
    field_name: &str,
    array: &[Value],
    item_type: &FieldType,
) -> Vec<ValidationError> {
    let base = FieldPath::field(field_name);
    let mut errors = Vec::new();
    for (i, element) in array.iter().enumerate() {
        errors.extend(validate_scalar(&base.index(i), element, item_type));
    }
    errors
}

/// Validate every element of an object array. A non-mapping element gets a
/// single type error at its index and no property checks.
pub fn validate_object_array(
    field_name: &str,
    array: &[Value],
    properties: &[PropertySchema],
) -> Vec<ValidationError> {
    let base = FieldPath::field(field_name);
    let mut errors = Vec::new();
    for (i, element) in array.iter().enumerate() {
        let path = base.index(i);
        match element.as_object() {
            Some(item) => errors.extend(validate_object_item(&path, item, properties)),
            None => errors.push(ValidationError::new(
                &path,
                ErrorKind::TypeError,
                "must be an object",
                "Provide an object with the expected properties",
            )),
        }
    }
    errors
}

/// Comprehensive entry point for an array-typed field: checks that the value
/// is a sequence, then dispatches on the declared item schema.
///
/// Only meaningful for schemas whose type is [`FieldType::Array`]. Called
/// with any other schema it performs no checks and returns an empty list;
/// the document validator routes non-array fields to the scalar validator
/// instead.
pub fn validate_array_field(
    field_name: &str,
    value: &Value,
    schema: &FieldSchema,
) -> Vec<ValidationError> {
    let FieldType::Array { items } = &schema.field_type else {
        return Vec::new();
    };
    let Some(array) = value.as_array() else {
        return vec![ValidationError::new(
            &FieldPath::field(field_name),
            ErrorKind::TypeError,
            "must be an array",
            "Provide a list of values",
        )];
    };
    match items.as_ref() {
        FieldType::Object { properties } => validate_object_array(field_name, array, properties),
        item_type => validate_scalar_array(field_name, array, item_type),
    }
}
