//! Validation error types and the aggregate validation result
//!
//! Copyright (c) 2025 Veridoc Team
//! Licensed under the Apache-2.0 license

use crate::validation::path::FieldPath;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    RequiredField,
    TypeError,
    LengthConstraint,
    RangeConstraint,
    PatternConstraint,
    FormatError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::RequiredField => "required field",
            ErrorKind::TypeError => "type error",
            ErrorKind::LengthConstraint => "length constraint",
            ErrorKind::RangeConstraint => "range constraint",
            ErrorKind::PatternConstraint => "pattern constraint",
            ErrorKind::FormatError => "format error",
        };
        write!(f, "{}", label)
    }
}

/// One validation failure with path context and a fix suggestion.
///
/// `field_path` uses bracket-index notation for array elements
/// (`serial_numbers[1]`) and dot notation for nested properties
/// (`line_items[0].quantity`). The reporting layer renders these verbatim.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    pub field_path: String,
    pub kind: ErrorKind,
    pub message: String,
    pub suggestion: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Validation error at '{}' ({}): {}",
            self.field_path, self.kind, self.message
        )?;
        if !self.suggestion.is_empty() {
            write!(f, ". Suggestion: {}", self.suggestion)?;
        }
        Ok(())
    }
}

impl ValidationError {
    /// Create a new validation error at the given path.
    pub fn new<M, S>(path: &FieldPath, kind: ErrorKind, message: M, suggestion: S) -> Self
    where
        M: Into<String>,
        S: Into<String>,
    {
        Self {
            field_path: path.to_string(),
            kind,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// Aggregate outcome of validating one document against one schema.
///
/// `is_valid` is true iff `errors` is empty; [`ValidationResult::from_errors`]
/// is the only constructor, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Build a result from an accumulated error list.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Result for a document with no violations.
    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            return write!(f, "document is valid");
        }
        write!(f, "{} validation error(s):", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}
