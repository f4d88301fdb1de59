//! Default value synthesis
//!
//! Produces type-appropriate empty values used by the row-editing UI to seed
//! new array elements. The unknown-type fallback mirrors validation: an
//! unrecognized type defaults to an empty string and never fails checks.
//!
//! Copyright (c) 2025 Veridoc Team
//! Licensed under the Apache-2.0 license

use crate::schema::{FieldType, PropertySchema};
use chrono::Local;
use serde_json::{json, Map, Value};

/// Default value for one field type.
pub fn default_for(field_type: &FieldType) -> Value {
    match field_type {
        FieldType::String { .. } | FieldType::Unknown => json!(""),
        FieldType::Number { .. } => json!(0.0),
        FieldType::Integer { .. } => json!(0),
        FieldType::Boolean => json!(false),
        FieldType::Date => json!(Local::now().date_naive().format("%Y-%m-%d").to_string()),
        FieldType::Array { .. } => json!([]),
        FieldType::Object { properties } => Value::Object(default_object(properties)),
    }
}

/// Fully-populated template row: every declared property set to its default.
pub fn default_object(properties: &[PropertySchema]) -> Map<String, Value> {
    properties
        .iter()
        .map(|property| {
            (
                property.name.clone(),
                default_for(&property.schema.field_type),
            )
        })
        .collect()
}
