//! Property-based tests for the validation engine
//!
//! These verify invariants that must hold across arbitrary schemas and
//! documents: the is_valid/errors consistency, the required/optional
//! presence rules, empty-array behavior, and normalizer idempotence.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use veridoc_core::{
    normalize, validate_document, validate_scalar_array, DocumentSchema, ErrorKind, FieldDef,
    FieldSchema, FieldType,
};

/// Strategy for generating scalar JSON values of every primitive shape.
fn scalar_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        (-1.0e12f64..1.0e12).prop_map(|f| json!(f)),
        "[a-zA-Z0-9 _.-]{0,40}".prop_map(Value::String),
    ]
}

/// Strategy for generating scalar field types with assorted constraints.
fn scalar_type_strategy() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        (proptest::option::of(0usize..10), proptest::option::of(10usize..40)).prop_map(
            |(min_length, max_length)| FieldType::String {
                min_length,
                max_length,
                pattern: None,
            }
        ),
        Just(FieldType::String {
            min_length: None,
            max_length: None,
            pattern: Some("[A-Z0-9]+".to_string()),
        }),
        (proptest::option::of(-100.0f64..0.0), proptest::option::of(0.0f64..100.0))
            .prop_map(|(min_value, max_value)| FieldType::Number { min_value, max_value }),
        (proptest::option::of(-100i64..0), proptest::option::of(0i64..100))
            .prop_map(|(min_value, max_value)| FieldType::Integer { min_value, max_value }),
        Just(FieldType::Boolean),
        Just(FieldType::Date),
        Just(FieldType::Unknown),
    ]
}

fn field_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}".prop_map(String::from)
}

fn document_strategy() -> impl Strategy<Value = Map<String, Value>> {
    proptest::collection::hash_map(field_name_strategy(), scalar_value_strategy(), 0..6)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_empty_array_never_yields_element_errors(item_type in scalar_type_strategy()) {
        let errors = validate_scalar_array("items", &[], &item_type);
        prop_assert!(errors.is_empty());
    }

    #[test]
    fn prop_is_valid_iff_errors_empty(
        data in document_strategy(),
        name in field_name_strategy(),
        field_type in scalar_type_strategy(),
        required in any::<bool>(),
    ) {
        let schema = DocumentSchema::new(vec![FieldDef::new(
            name,
            FieldSchema { required, field_type },
        )]);
        let result = validate_document(&data, &schema);
        prop_assert_eq!(result.is_valid, result.errors.is_empty());
    }

    #[test]
    fn prop_required_absent_field_reports_exactly_once(
        name in field_name_strategy(),
        field_type in scalar_type_strategy(),
    ) {
        let schema = DocumentSchema::new(vec![FieldDef::new(
            name.clone(),
            FieldSchema::required(field_type),
        )]);
        let result = validate_document(&Map::new(), &schema);
        prop_assert_eq!(result.errors.len(), 1);
        prop_assert_eq!(result.errors[0].kind, ErrorKind::RequiredField);
        prop_assert_eq!(result.errors[0].field_path.as_str(), name.as_str());
    }

    #[test]
    fn prop_optional_absent_field_reports_nothing(
        name in field_name_strategy(),
        field_type in scalar_type_strategy(),
    ) {
        let schema = DocumentSchema::new(vec![FieldDef::new(
            name,
            FieldSchema::optional(field_type),
        )]);
        let result = validate_document(&Map::new(), &schema);
        prop_assert!(result.is_valid);
    }

    #[test]
    fn prop_unknown_type_never_fails_present_values(
        name in field_name_strategy(),
        value in scalar_value_strategy(),
    ) {
        let schema = DocumentSchema::new(vec![FieldDef::new(
            name.clone(),
            FieldSchema::optional(FieldType::Unknown),
        )]);
        let mut data = Map::new();
        data.insert(name, value);
        let result = validate_document(&data, &schema);
        prop_assert!(result.is_valid);
    }

    #[test]
    fn prop_normalize_is_idempotent(data in document_strategy()) {
        let value = Value::Object(data);
        let once = normalize(&value);
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_validation_does_not_mutate_input(
        data in document_strategy(),
        name in field_name_strategy(),
        field_type in scalar_type_strategy(),
    ) {
        let schema = DocumentSchema::new(vec![FieldDef::new(
            name,
            FieldSchema::required(field_type),
        )]);
        let before = data.clone();
        let _ = validate_document(&data, &schema);
        prop_assert_eq!(data, before);
    }
}
