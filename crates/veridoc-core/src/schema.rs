//! Strongly-typed schema model for document validation
//!
//! A document schema is an ordered list of named fields; each field carries a
//! `required` flag and a [`FieldType`] describing the expected value shape and
//! its constraints. Field and property order is declaration order, which the
//! validators preserve when reporting errors.
//!
//! Copyright (c) 2025 Veridoc Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// Expected type of a field or property, with type-specific constraints.
///
/// Serialized form uses a `type` discriminator, so a schema file reads as
/// `{"type": "string", "min_length": 2}`. Unrecognized type names map to
/// [`FieldType::Unknown`], which validates permissively and defaults to an
/// empty string; schemas authored against a newer engine version degrade
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_length: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
        /// Regular expression the entire value must match.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_value: Option<f64>,
    },
    Integer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_value: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_value: Option<i64>,
    },
    Boolean,
    /// Calendar date in strict `YYYY-MM-DD` notation.
    Date,
    Array {
        /// Item schema: a scalar type, or [`FieldType::Object`] for object arrays.
        items: Box<FieldType>,
    },
    Object {
        properties: Vec<PropertySchema>,
    },
    /// Permissive fallback for unrecognized type names: never fails
    /// validation and defaults to an empty string.
    #[serde(other)]
    Unknown,
}

impl FieldType {
    /// Unconstrained string type.
    pub fn string() -> Self {
        FieldType::String {
            min_length: None,
            max_length: None,
            pattern: None,
        }
    }

    /// Unconstrained floating-point number type.
    pub fn number() -> Self {
        FieldType::Number {
            min_value: None,
            max_value: None,
        }
    }

    /// Unconstrained integer type.
    pub fn integer() -> Self {
        FieldType::Integer {
            min_value: None,
            max_value: None,
        }
    }
}

/// One field or property schema: a type plus the required flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub field_type: FieldType,
}

impl FieldSchema {
    /// Schema for a required field of the given type.
    pub fn required(field_type: FieldType) -> Self {
        Self {
            required: true,
            field_type,
        }
    }

    /// Schema for an optional field of the given type.
    pub fn optional(field_type: FieldType) -> Self {
        Self {
            required: false,
            field_type,
        }
    }
}

/// A named property of an object array element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    pub name: String,
    #[serde(flatten)]
    pub schema: FieldSchema,
}

impl PropertySchema {
    pub fn new<N: Into<String>>(name: N, schema: FieldSchema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

/// A named top-level field of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(flatten)]
    pub schema: FieldSchema,
}

impl FieldDef {
    pub fn new<N: Into<String>>(name: N, schema: FieldSchema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

/// Complete schema for one document: fields in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentSchema {
    pub fields: Vec<FieldDef>,
}

impl DocumentSchema {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields }
    }
}
