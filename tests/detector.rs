//! Tests for the unconnected-input detector and error aggregation.
mod common;
use common::*;
use flowscope::prelude::*;

#[test]
fn required_inputs_end_resolved_or_flagged_never_neither() {
    // A mixed tree: some inputs connect, some don't, one is optional.
    let mut inner = flow_with(
        "Inner",
        vec![
            block_with("Setup", vec![], vec!["conn"]),
            case_with("Use", vec![input("conn"), input("missing")], vec![]),
        ],
    );
    inner.resource_requests.push(resource("env", "Environment"));
    let flow = flow_with(
        "Outer",
        vec![
            inner,
            case_with("Tail", vec![optional_input("retries"), input("conn")], vec![]),
        ],
    );
    let tree = Resolver::new().build_and_resolve(&flow);

    for (_, record) in tree.iter_pre_order() {
        if record.is_composite() {
            continue;
        }
        for (name, provider) in &record.resolved_providers {
            let flagged = record
                .errors
                .contains(&format!("Input {name} is not connected!"));
            assert!(
                provider.is_resolved() || flagged,
                "input '{name}' on '{}' is neither resolved nor flagged",
                record.name
            );
        }
    }
}

#[test]
fn optional_inputs_are_never_flagged() {
    let flow = flow_with("F", vec![case_with("C", vec![optional_input("timeout")], vec![])]);
    let tree = Resolver::new().build_and_resolve(&flow);
    assert!(tree.find_by_name("C").unwrap().errors.is_empty());
    assert!(tree.root().errors.is_empty());
}

#[test]
fn errors_aggregate_upward_in_pre_order() {
    // The flow carries its own diagnostic (unknown common name), then each
    // child's errors follow in child order.
    let mut flow = flow_with(
        "F",
        vec![
            case_with("A", vec![input("a")], vec![]),
            case_with("B", vec![input("b")], vec![]),
        ],
    );
    flow.common
        .push(("bogus".to_string(), CommonValue::Literal(serde_json::json!(1))));
    let tree = Resolver::new().build_and_resolve(&flow);

    assert_eq!(
        tree.root().errors,
        vec![
            "Unknown input bogus".to_string(),
            "Input a is not connected!".to_string(),
            "Input b is not connected!".to_string(),
        ]
    );
}

#[test]
fn aggregation_spans_multiple_levels() {
    let flow = flow_with(
        "Root",
        vec![flow_with(
            "Mid",
            vec![case_with("Leaf", vec![input("x")], vec![])],
        )],
    );
    let tree = Resolver::new().build_and_resolve(&flow);

    let expected = "Input x is not connected!".to_string();
    assert_eq!(tree.find_by_name("Leaf").unwrap().errors, vec![expected.clone()]);
    assert_eq!(tree.find_by_name("Mid").unwrap().errors, vec![expected.clone()]);
    assert_eq!(tree.root().errors, vec![expected]);
}

#[test]
fn list_errors_matches_record_errors() {
    let tree = Resolver::new().build_and_resolve(&create_reversed_token_flow());
    let id = tree.find_id("Y").unwrap();
    assert_eq!(tree.list_errors(id), tree.record(id).errors.as_slice());
    assert_eq!(
        tree.list_errors(tree.root_id()),
        &["Input token is not connected!".to_string()]
    );
}

#[test]
fn connected_tree_has_no_errors() {
    let tree = Resolver::new().build_and_resolve(&create_token_flow());
    for (_, record) in tree.iter_pre_order() {
        assert!(record.errors.is_empty(), "unexpected errors on '{}'", record.name);
    }
}
