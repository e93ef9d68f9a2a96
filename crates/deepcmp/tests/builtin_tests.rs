use deepcmp::{
    api, AliasValues, ArrayUnpacker, CauseKind, Config, NumberComparator, ObjectUnpacker,
};
use serde_json::json;

fn no_config() -> (AliasValues, Config) {
    (AliasValues::new(), Config::new())
}

// ===== OBJECT UNPACKER =====

#[test]
fn test_object_value_mismatch_is_reported_at_key_index() {
    let (aliases, config) = no_config();
    let errors = api::compare(
        json!({"a": 1, "b": 2}),
        json!({"a": 1, "b": 3}),
        &[&ObjectUnpacker],
        &[&NumberComparator],
        &aliases,
        &config,
    )
    .unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].index.to_string(), "(\"b\",)");
    assert_eq!(errors[0].cause.kind(), CauseKind::ValueMismatch);
    assert_eq!(errors[0].cause.actual(), Some(&json!(2)));
    assert_eq!(errors[0].cause.expected(), Some(&json!(3)));
}

#[test]
fn test_object_key_set_mismatch_is_one_structural_error_without_descent() {
    let (aliases, config) = no_config();
    let errors = api::compare(
        json!({"a": 1, "c": 9}),
        json!({"a": 2, "b": 2}),
        &[&ObjectUnpacker],
        &[&NumberComparator],
        &aliases,
        &config,
    )
    .unwrap();

    // One error at the object's own index; the differing "a" values are
    // never compared because the node is not descended.
    assert_eq!(errors.len(), 1);
    assert!(errors[0].index.is_root());
    assert_eq!(errors[0].cause.kind(), CauseKind::StructuralMismatch);
    assert!(errors[0].cause.message().contains("extra: [c]"));
    assert!(errors[0].cause.message().contains("missing: [b]"));
}

#[test]
fn test_empty_objects_are_equivalent() {
    let (aliases, config) = no_config();
    let errors = api::compare(
        json!({}),
        json!({}),
        &[&ObjectUnpacker],
        &[&NumberComparator],
        &aliases,
        &config,
    )
    .unwrap();
    assert!(errors.is_empty());
}

// ===== ARRAY UNPACKER =====

#[test]
fn test_array_length_mismatch_is_one_error_at_the_array_index() {
    let (aliases, config) = no_config();
    let errors = api::compare(
        json!([1, 2]),
        json!([1, 2, 3]),
        &[&ArrayUnpacker],
        &[&NumberComparator],
        &aliases,
        &config,
    )
    .unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].index.to_string(), "()");
    assert_eq!(errors[0].cause.kind(), CauseKind::StructuralMismatch);
    assert!(errors[0].cause.message().contains("2 != 3"));
}

#[test]
fn test_equal_length_arrays_compare_every_position() {
    let (aliases, config) = no_config();
    let errors = api::compare(
        json!([1, 2]),
        json!([3, 4]),
        &[&ArrayUnpacker],
        &[&NumberComparator],
        &aliases,
        &config,
    )
    .unwrap();

    let indices: Vec<String> = errors.iter().map(|e| e.index.to_string()).collect();
    assert_eq!(indices, vec!["(0,)", "(1,)"]);
}

#[test]
fn test_nested_containers_build_full_path_indices() {
    let (aliases, config) = no_config();
    let errors = api::compare(
        json!({"items": [{"count": 1}]}),
        json!({"items": [{"count": 2}]}),
        &[&ObjectUnpacker, &ArrayUnpacker],
        &[&NumberComparator],
        &aliases,
        &config,
    )
    .unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].index.to_string(), "(\"items\", 0, \"count\")");
}

// ===== NUMBER COMPARATOR =====

#[test]
fn test_relative_tolerance_accepts_close_and_rejects_far() {
    let aliases = AliasValues::new();
    let config = Config::new().set("rel_tol", 1e-2);

    let close = api::compare(
        json!(1.004),
        json!(1.0),
        &[],
        &[&NumberComparator],
        &aliases,
        &config,
    )
    .unwrap();
    assert!(close.is_empty());

    let far = api::compare(
        json!(1.03),
        json!(1.0),
        &[],
        &[&NumberComparator],
        &aliases,
        &config,
    )
    .unwrap();
    assert_eq!(far.len(), 1);
    assert_eq!(far[0].cause.kind(), CauseKind::ValueMismatch);
    assert!(far[0].cause.message().contains("not close"));
}

#[test]
fn test_default_tolerance_is_strict() {
    let (aliases, config) = no_config();
    let errors = api::compare(
        json!(1.004),
        json!(1.0),
        &[],
        &[&NumberComparator],
        &aliases,
        &config,
    )
    .unwrap();
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_integer_and_float_representations_of_same_number_are_equal() {
    let (aliases, config) = no_config();
    let errors = api::compare(
        json!(1),
        json!(1.0),
        &[],
        &[&NumberComparator],
        &aliases,
        &config,
    )
    .unwrap();
    assert!(errors.is_empty());
}

#[test]
fn test_number_comparator_declines_non_numbers() {
    let (aliases, config) = no_config();
    // No other comparator in the list, so a declined pair is unhandled.
    let errors = api::compare(
        json!("x"),
        json!("x"),
        &[],
        &[&NumberComparator],
        &aliases,
        &config,
    )
    .unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].cause.kind(), CauseKind::UnhandledType);
}
