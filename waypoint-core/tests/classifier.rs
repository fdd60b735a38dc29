use std::collections::BTreeSet;

use serde_json::json;
use waypoint_core::args;
use waypoint_core::params::{Arg, ParamType, Parameter};
use waypoint_core::recorder::{classify, Classification};

fn tokens(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn constants_and_placeholders_keep_argument_order() {
    let Classification {
        parameters,
        unconsumed,
    } = classify(&args![1, "plain", "{id}"], Vec::new());

    assert_eq!(
        parameters,
        vec![
            Parameter::constant(1),
            Parameter::constant("plain"),
            Parameter::PlaceholderSet {
                template: "{id}".into(),
                tokens: tokens(&["id"]),
                declared_type: ParamType::Set,
            },
        ]
    );
    assert!(unconsumed.is_empty());
}

#[test]
fn unset_slot_takes_declared_parameter() {
    let declared = vec![Parameter::named_with("x", Some("0".into()), ParamType::String)];
    let result = classify(&[Arg::Unset], declared.clone());
    assert_eq!(result.parameters, declared);
    assert!(result.unconsumed.is_empty());
}

#[test]
fn unset_slot_with_empty_pool_is_a_constant() {
    let result = classify(&[Arg::Unset], Vec::new());
    assert_eq!(result.parameters, vec![Parameter::constant(Arg::Unset)]);
    assert_eq!(result.parameters[0].declared_type(), ParamType::Any);
}

#[test]
fn pool_exhausted_midway_does_not_panic() {
    let result = classify(&[Arg::Unset, Arg::Unset], vec![Parameter::named("a")]);
    assert_eq!(
        result.parameters,
        vec![Parameter::named("a"), Parameter::constant(Arg::Unset)]
    );
}

#[test]
fn declared_pool_is_consumed_left_to_right_by_position() {
    let declared = vec![Parameter::named("first"), Parameter::named("second")];
    let result = classify(&args!["{lang}", Arg::Unset, 7, Arg::Unset], declared);
    let names: Vec<_> = result.parameters.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec![None, Some("first"), None, Some("second")]);
    assert!(result.parameters[0].is_placeholder_set());
    assert!(result.parameters[2].is_constant());
}

#[test]
fn placeholder_string_does_not_consume_from_pool() {
    let result = classify(&args!["{id}"], vec![Parameter::named("q")]);
    assert!(result.parameters[0].is_placeholder_set());
    assert_eq!(result.unconsumed, vec![Parameter::named("q")]);
}

#[test]
fn extra_declared_parameters_are_reported() {
    let declared = vec![Parameter::named("a"), Parameter::named("b")];
    let result = classify(&[Arg::Unset], declared);
    assert_eq!(result.parameters, vec![Parameter::named("a")]);
    assert_eq!(result.unconsumed, vec![Parameter::named("b")]);
}

#[test]
fn constant_types_are_inferred_from_literals() {
    let result = classify(
        &args![true, 2.5, 3, "s", json!([1]), json!(null)],
        Vec::new(),
    );
    let types: Vec<_> = result.parameters.iter().map(Parameter::declared_type).collect();
    assert_eq!(
        types,
        vec![
            ParamType::Bool,
            ParamType::Float,
            ParamType::Integer,
            ParamType::String,
            ParamType::Json,
            ParamType::Any,
        ]
    );
}

#[test]
fn string_with_unbalanced_brace_is_constant() {
    let result = classify(&args!["{id"], Vec::new());
    assert_eq!(result.parameters, vec![Parameter::constant("{id")]);
}

#[test]
fn no_arguments_yield_no_parameters() {
    let result = classify(&args![], vec![Parameter::named("x")]);
    assert!(result.parameters.is_empty());
    assert_eq!(result.unconsumed.len(), 1);
}

#[test]
fn placeholders_constructor_rejects_plain_strings() {
    assert!(Parameter::placeholders("plain").is_none());
    assert!(Parameter::placeholders("{a}-{b}").is_some());
}
