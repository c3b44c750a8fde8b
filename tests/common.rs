//! Common test utilities for building component definitions.
use flowscope::prelude::*;

#[allow(dead_code)]
pub fn input(name: &str) -> InputDefinition {
    InputDefinition {
        name: name.to_string(),
        optional: false,
    }
}

#[allow(dead_code)]
pub fn optional_input(name: &str) -> InputDefinition {
    InputDefinition {
        name: name.to_string(),
        optional: true,
    }
}

#[allow(dead_code)]
pub fn block_with(name: &str, inputs: Vec<InputDefinition>, outputs: Vec<&str>) -> ComponentDefinition {
    ComponentDefinition {
        inputs,
        outputs: outputs.into_iter().map(str::to_string).collect(),
        ..ComponentDefinition::new(name, ComponentKind::Block)
    }
}

#[allow(dead_code)]
pub fn case_with(name: &str, inputs: Vec<InputDefinition>, outputs: Vec<&str>) -> ComponentDefinition {
    ComponentDefinition {
        inputs,
        outputs: outputs.into_iter().map(str::to_string).collect(),
        ..ComponentDefinition::new(name, ComponentKind::Case)
    }
}

#[allow(dead_code)]
pub fn flow_with(name: &str, children: Vec<ComponentDefinition>) -> ComponentDefinition {
    ComponentDefinition {
        children,
        ..ComponentDefinition::new(name, ComponentKind::Flow)
    }
}

#[allow(dead_code)]
pub fn resource(name: &str, kind: &str) -> ResourceRequestDefinition {
    ResourceRequestDefinition {
        name: name.to_string(),
        kind: kind.to_string(),
        params: serde_json::Map::new(),
    }
}

/// Flow with children [X, Y]: X produces "token", Y requires it.
#[allow(dead_code)]
pub fn create_token_flow() -> ComponentDefinition {
    flow_with(
        "TokenFlow",
        vec![
            block_with("X", vec![], vec!["token"]),
            case_with("Y", vec![input("token")], vec![]),
        ],
    )
}

/// Same flow, but with the consumer before the producer.
#[allow(dead_code)]
pub fn create_reversed_token_flow() -> ComponentDefinition {
    flow_with(
        "TokenFlow",
        vec![
            case_with("Y", vec![input("token")], vec![]),
            block_with("X", vec![], vec!["token"]),
        ],
    )
}

/// Flow requesting a "server" resource, with the consumer nested two levels
/// deep.
#[allow(dead_code)]
pub fn create_resource_flow() -> ComponentDefinition {
    let mut outer = flow_with(
        "ResourceFlow",
        vec![flow_with(
            "MiddleFlow",
            vec![case_with("Z", vec![input("server")], vec![])],
        )],
    );
    outer.resource_requests.push(resource("server", "Server"));
    outer
}
