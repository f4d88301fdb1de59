//! Validation engine for structured documents
//!
//! Validators are layered leaf-first: the scalar validator checks one
//! primitive against one type and constraint set, the object and array
//! validators fan out over elements and properties, and
//! [`validate_document`] orchestrates a whole document. All of them are
//! pure functions over borrowed inputs that accumulate errors into the
//! list they return; nothing here panics or performs I/O.
//!
//! Copyright (c) 2025 Veridoc Team
//! Licensed under the Apache-2.0 license

pub mod array;
pub mod document;
pub mod error;
pub mod object;
pub mod path;
pub mod scalar;

pub use array::{validate_array_field, validate_object_array, validate_scalar_array};
pub use document::validate_document;
pub use error::{ErrorKind, ValidationError, ValidationResult};
pub use object::validate_object_item;
pub use path::{FieldPath, PathSegment};
pub use scalar::{validate_scalar, validate_scalar_messages};

use crate::schema::DocumentSchema;
use serde_json::{Map, Value};

/// Configuration for batch validation runs.
#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    /// Stop after the first invalid document.
    pub fail_fast: bool,
    /// Maximum number of errors to collect across the batch (0 = unlimited).
    pub max_errors: usize,
}

impl ValidationConfig {
    /// Enable fail-fast mode.
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set the maximum number of errors to collect.
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Validate a batch of documents against one schema.
///
/// Results are returned in input order. With `fail_fast` the batch stops
/// after the first invalid document; with `max_errors > 0` it stops once
/// that many errors have accumulated across documents. Either way the
/// returned slice covers a prefix of the input.
pub fn validate_documents_batch(
    documents: &[Map<String, Value>],
    schema: &DocumentSchema,
    config: &ValidationConfig,
) -> Vec<ValidationResult> {
    let mut results = Vec::with_capacity(documents.len());
    let mut total_errors = 0;

    for document in documents {
        let result = validate_document(document, schema);
        total_errors += result.errors.len();
        let invalid = !result.is_valid;
        results.push(result);

        if invalid && config.fail_fast {
            break;
        }
        if config.max_errors > 0 && total_errors >= config.max_errors {
            break;
        }
    }

    results
}
