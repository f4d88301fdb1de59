//! Scalar value validation
//!
//! Validates one primitive value against one scalar field type. The type
//! check is a fail-fast gate: a value of the wrong type gets exactly one
//! `TypeError` and no constraint checks. Constraint checks on a type-correct
//! value are independent; a string that is both too short and
//! pattern-mismatched reports both violations.
//!
//! Copyright (c) 2025 Veridoc Team
//! Licensed under the Apache-2.0 license

use crate::schema::FieldType;
use crate::validation::error::{ErrorKind, ValidationError};
use crate::validation::path::FieldPath;
use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Strict `YYYY-MM-DD` shape: four-digit year, two-digit month and day,
/// dash separators, no time component.
fn date_shape() -> &'static Regex {
    static DATE_SHAPE: OnceLock<Regex> = OnceLock::new();
    DATE_SHAPE.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date shape pattern is valid")
    })
}

/// Validate one scalar value against its declared type and constraints.
///
/// Returns every violation found; an empty list means the value conforms.
/// Array and Object types are handled by their own validators and produce
/// no scalar errors here, and [`FieldType::Unknown`] is permissive.
pub fn validate_scalar(
    path: &FieldPath,
    value: &Value,
    field_type: &FieldType,
) -> Vec<ValidationError> {
    match field_type {
        FieldType::String {
            min_length,
            max_length,
            pattern,
        } => validate_string(path, value, *min_length, *max_length, pattern.as_deref()),
        FieldType::Number {
            min_value,
            max_value,
        } => validate_number(path, value, *min_value, *max_value),
        FieldType::Integer {
            min_value,
            max_value,
        } => validate_integer(path, value, *min_value, *max_value),
        FieldType::Boolean => validate_boolean(path, value),
        FieldType::Date => validate_date(path, value),
        FieldType::Array { .. } | FieldType::Object { .. } | FieldType::Unknown => Vec::new(),
    }
}

/// Simpler parallel signature for callers that only need message strings.
/// Same rules as [`validate_scalar`], string-only output.
pub fn validate_scalar_messages(value: &Value, field_type: &FieldType) -> Vec<String> {
    validate_scalar(&FieldPath::field("value"), value, field_type)
        .into_iter()
        .map(|error| error.message)
        .collect()
}

fn validate_string(
    path: &FieldPath,
    value: &Value,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<&str>,
) -> Vec<ValidationError> {
    let Value::String(s) = value else {
        return vec![ValidationError::new(
            path,
            ErrorKind::TypeError,
            "must be a string",
            "Enter a text value",
        )];
    };

    let mut errors = Vec::new();
    let length = s.chars().count();
    if let Some(min) = min_length {
        if length < min {
            errors.push(ValidationError::new(
                path,
                ErrorKind::LengthConstraint,
                format!("must be at least {} characters long", min),
                format!("Lengthen the value to at least {} characters", min),
            ));
        }
    }
    if let Some(max) = max_length {
        if length > max {
            errors.push(ValidationError::new(
                path,
                ErrorKind::LengthConstraint,
                format!("must be at most {} characters long", max),
                format!("Shorten the value to at most {} characters", max),
            ));
        }
    }
    if let Some(pattern) = pattern {
        // Full-string match: the entire value must satisfy the pattern, not
        // merely contain a matching substring.
        match Regex::new(&format!("^(?:{})$", pattern)) {
            Ok(re) => {
                if !re.is_match(s) {
                    errors.push(ValidationError::new(
                        path,
                        ErrorKind::PatternConstraint,
                        format!("does not match the required pattern '{}'", pattern),
                        format!("Use a value matching '{}'", pattern),
                    ));
                }
            }
            Err(_) => {
                // Schema self-consistency is out of scope, but a broken
                // author-supplied pattern must not panic the engine.
                errors.push(ValidationError::new(
                    path,
                    ErrorKind::PatternConstraint,
                    format!("schema pattern '{}' is not a valid regular expression", pattern),
                    "Correct the pattern in the field schema",
                ));
            }
        }
    }
    errors
}

fn validate_number(
    path: &FieldPath,
    value: &Value,
    min_value: Option<f64>,
    max_value: Option<f64>,
) -> Vec<ValidationError> {
    // JSON booleans are a distinct type, never integer-like here.
    let Value::Number(n) = value else {
        return vec![ValidationError::new(
            path,
            ErrorKind::TypeError,
            "must be a number",
            "Enter a numeric value",
        )];
    };
    let Some(x) = n.as_f64() else {
        return Vec::new();
    };

    let mut errors = Vec::new();
    if let Some(min) = min_value {
        if x < min {
            errors.push(ValidationError::new(
                path,
                ErrorKind::RangeConstraint,
                format!("must be at least {}", min),
                format!("Use a value of at least {}", min),
            ));
        }
    }
    if let Some(max) = max_value {
        if x > max {
            errors.push(ValidationError::new(
                path,
                ErrorKind::RangeConstraint,
                format!("must be at most {}", max),
                format!("Use a value of at most {}", max),
            ));
        }
    }
    errors
}

fn validate_integer(
    path: &FieldPath,
    value: &Value,
    min_value: Option<i64>,
    max_value: Option<i64>,
) -> Vec<ValidationError> {
    let type_error = || {
        vec![ValidationError::new(
            path,
            ErrorKind::TypeError,
            "must be an integer",
            "Enter a whole number",
        )]
    };
    let Value::Number(n) = value else {
        return type_error();
    };
    // Fractional values are not integers; the normalizer has already folded
    // integral floats into plain integers.
    let Some(i) = n.as_i64() else {
        return type_error();
    };

    let mut errors = Vec::new();
    if let Some(min) = min_value {
        if i < min {
            errors.push(ValidationError::new(
                path,
                ErrorKind::RangeConstraint,
                format!("must be at least {}", min),
                format!("Use a value of at least {}", min),
            ));
        }
    }
    if let Some(max) = max_value {
        if i > max {
            errors.push(ValidationError::new(
                path,
                ErrorKind::RangeConstraint,
                format!("must be at most {}", max),
                format!("Use a value of at most {}", max),
            ));
        }
    }
    errors
}

fn validate_boolean(path: &FieldPath, value: &Value) -> Vec<ValidationError> {
    if value.is_boolean() {
        return Vec::new();
    }
    // Numeric 0/1 and the strings "true"/"false" are rejected.
    vec![ValidationError::new(
        path,
        ErrorKind::TypeError,
        "must be a boolean",
        "Use true or false",
    )]
}

fn validate_date(path: &FieldPath, value: &Value) -> Vec<ValidationError> {
    if let Value::String(s) = value {
        if date_shape().is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
            return Vec::new();
        }
    }
    vec![ValidationError::new(
        path,
        ErrorKind::FormatError,
        "must be a valid date in YYYY-MM-DD format",
        "Use the format YYYY-MM-DD, e.g. 2024-01-15",
    )]
}
