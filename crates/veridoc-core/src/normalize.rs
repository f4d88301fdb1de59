//! Input normalization
//!
//! Edited data coming back from table widgets carries artifacts of the
//! tabular tooling it passed through: missing-value sentinel strings
//! ("NaN", "<NA>", "NaT", ...) and integer-valued numbers that were widened
//! to floats on the way. This pass folds both back into canonical
//! primitives before validation; the validators assume canonical input and
//! do not unwrap boxed numerics themselves.
//!
//! Copyright (c) 2025 Veridoc Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};

/// Sentinel strings emitted for missing values by common tabular tooling.
const NA_SENTINELS: &[&str] = &["NaN", "nan", "<NA>", "NaT", "N/A", "n/a", "None", "null"];

/// Largest float magnitude whose integral values are exactly representable,
/// 2^53. Integral floats beyond it are left untouched rather than folded.
const MAX_EXACT_INT_IN_F64: f64 = 9_007_199_254_740_992.0;

/// Normalize a shallow mapping or sequence for validation.
///
/// Walks one level deep (plus the entries of object elements inside a
/// sequence), replacing sentinel strings with null and folding
/// integral-valued floats into plain integers. Everything else is returned
/// unchanged; the input is not mutated.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(normalize_entries(map)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(map) => Value::Object(normalize_entries(map)),
                    other => normalize_scalar(other),
                })
                .collect(),
        ),
        other => normalize_scalar(other),
    }
}

fn normalize_entries(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), normalize_scalar(value)))
        .collect()
}

fn normalize_scalar(value: &Value) -> Value {
    match value {
        Value::String(s) if NA_SENTINELS.contains(&s.as_str()) => Value::Null,
        Value::Number(n) if !n.is_i64() && !n.is_u64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INT_IN_F64 => {
                Value::from(f as i64)
            }
            _ => value.clone(),
        },
        other => other.clone(),
    }
}
