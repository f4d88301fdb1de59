//! Object element validation
//!
//! Validates one mapping against an ordered property schema list, delegating
//! each present property to the scalar validator.
//!
//! Copyright (c) 2025 Veridoc Team
//! Licensed under the Apache-2.0 license

use crate::schema::PropertySchema;
use crate::validation::error::{ErrorKind, ValidationError};
use crate::validation::path::FieldPath;
use serde_json::{Map, Value};

use super::scalar::validate_scalar;

/// A value counts as empty when it is null or an empty string. Required
/// properties treat empty the same as absent; optional properties skip
/// empty values without type or constraint checks.
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Validate one object element against its property schemas, in property
/// declaration order. `prefix` addresses the element itself, e.g.
/// `line_items[0]`.
pub fn validate_object_item(
    prefix: &FieldPath,
    item: &Map<String, Value>,
    properties: &[PropertySchema],
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for property in properties {
        let path = prefix.property(&property.name);
        match item.get(&property.name) {
            Some(value) if !is_empty_value(value) => {
                errors.extend(validate_scalar(&path, value, &property.schema.field_type));
            }
            _ => {
                // Absent, null, or empty string: one required error, or
                // nothing at all for optional properties.
                if property.schema.required {
                    errors.push(required_error(&path, &property.name));
                }
            }
        }
    }
    errors
}

pub(crate) fn required_error(path: &FieldPath, name: &str) -> ValidationError {
    ValidationError::new(
        path,
        ErrorKind::RequiredField,
        format!("Required field '{}' is missing or empty", name),
        "Provide a value for this field",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldSchema, FieldType};
    use serde_json::json;

    fn line_item_properties() -> Vec<PropertySchema> {
        vec![
            PropertySchema::new("item_code", FieldSchema::required(FieldType::string())),
            PropertySchema::new(
                "quantity",
                FieldSchema::required(FieldType::Integer {
                    min_value: Some(1),
                    max_value: None,
                }),
            ),
            PropertySchema::new("notes", FieldSchema::optional(FieldType::string())),
        ]
    }

    fn as_map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_valid_item_produces_no_errors() {
        let item = as_map(json!({"item_code": "ITM1", "quantity": 3}));
        let prefix = FieldPath::field("line_items").index(0);
        assert!(validate_object_item(&prefix, &item, &line_item_properties()).is_empty());
    }

    #[test]
    fn test_missing_required_property_reports_once_and_skips_checks() {
        let item = as_map(json!({"item_code": "ITM1"}));
        let prefix = FieldPath::field("line_items").index(0);
        let errors = validate_object_item(&prefix, &item, &line_item_properties());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::RequiredField);
        assert_eq!(errors[0].field_path, "line_items[0].quantity");
    }

    #[test]
    fn test_null_required_property_counts_as_empty() {
        let item = as_map(json!({"item_code": null, "quantity": 2}));
        let prefix = FieldPath::field("line_items").index(0);
        let errors = validate_object_item(&prefix, &item, &line_item_properties());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::RequiredField);
        assert_eq!(errors[0].field_path, "line_items[0].item_code");
    }

    #[test]
    fn test_optional_property_absent_or_empty_is_skipped() {
        let item = as_map(json!({"item_code": "ITM1", "quantity": 2, "notes": ""}));
        let prefix = FieldPath::field("line_items").index(0);
        assert!(validate_object_item(&prefix, &item, &line_item_properties()).is_empty());
    }

    #[test]
    fn test_errors_follow_property_declaration_order() {
        let item = as_map(json!({"item_code": 7, "quantity": 0}));
        let prefix = FieldPath::field("line_items").index(0);
        let errors = validate_object_item(&prefix, &item, &line_item_properties());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field_path, "line_items[0].item_code");
        assert_eq!(errors[0].kind, ErrorKind::TypeError);
        assert_eq!(errors[1].field_path, "line_items[0].quantity");
        assert_eq!(errors[1].kind, ErrorKind::RangeConstraint);
    }
}
