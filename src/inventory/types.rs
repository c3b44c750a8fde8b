use indexmap::IndexMap;
use serde::Deserialize;

use crate::component::{
    CommonValue, ComponentDefinition, ComponentKind, ComponentMetadata, InputDefinition,
    IntoComponent, ResourceRequestDefinition,
};
use crate::error::{InventoryConversionError, InventoryParseError};

/// A raw test-inventory dump, as exported by the host framework.
///
/// Common-parameter values are plain JSON values; a pipe redirection is
/// written as a single-key object `{"pipe": "<target slot name>"}`.
#[derive(Debug, Deserialize)]
pub struct TestInventory {
    pub tests: Vec<InventoryComponent>,
}

impl TestInventory {
    /// Load an inventory dump from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, InventoryParseError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            InventoryParseError::JsonParseError(format!("Could not read '{path}': {e}"))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, InventoryParseError> {
        serde_json::from_str(content).map_err(|e| InventoryParseError::JsonParseError(e.to_string()))
    }
}

/// One component entry in an inventory dump.
#[derive(Debug, Deserialize, Clone)]
pub struct InventoryComponent {
    pub name: String,
    /// "case", "block", "flow" or "suite" (suites resolve like flows).
    pub kind: String,
    #[serde(default)]
    pub inputs: Vec<InventoryInput>,
    #[serde(default)]
    pub outputs: Vec<String>,
    #[serde(default, alias = "resourceRequests")]
    pub resource_requests: Vec<InventoryResourceRequest>,
    #[serde(default)]
    pub common: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    pub children: Vec<InventoryComponent>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Timeout in seconds.
    #[serde(default)]
    pub timeout: Option<f64>,
    #[serde(default)]
    pub doc: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryInput {
    pub name: String,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryResourceRequest {
    pub name: String,
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(default)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

impl IntoComponent for InventoryComponent {
    fn into_component(self) -> Result<ComponentDefinition, InventoryConversionError> {
        let kind = match self.kind.as_str() {
            "case" => ComponentKind::Case,
            "block" => ComponentKind::Block,
            "flow" | "suite" => ComponentKind::Flow,
            other => {
                return Err(InventoryConversionError::ValidationError(format!(
                    "component '{}' has unknown kind '{other}'",
                    self.name
                )));
            }
        };

        // A broken child becomes a diagnostic stub so the rest of the tree
        // still resolves.
        let mut children = Vec::new();
        for child in self.children {
            let child_name = child.name.clone();
            match child.into_component() {
                Ok(definition) => children.push(definition),
                Err(err) => {
                    children.push(ComponentDefinition::diagnostic_stub(child_name, err.to_string()))
                }
            }
        }

        Ok(ComponentDefinition {
            name: self.name,
            kind,
            inputs: self
                .inputs
                .into_iter()
                .map(|input| InputDefinition {
                    name: input.name,
                    optional: input.optional,
                })
                .collect(),
            outputs: self.outputs,
            resource_requests: self
                .resource_requests
                .into_iter()
                .map(|request| ResourceRequestDefinition {
                    name: request.name,
                    kind: request.kind,
                    params: request.params,
                })
                .collect(),
            common: self
                .common
                .into_iter()
                .map(|(name, value)| (name, common_value(value)))
                .collect(),
            children,
            metadata: ComponentMetadata {
                tags: self.tags,
                timeout_secs: self.timeout,
                doc: self.doc,
            },
            diagnostics: Vec::new(),
        })
    }
}

fn common_value(value: serde_json::Value) -> CommonValue {
    if let serde_json::Value::Object(map) = &value {
        if map.len() == 1 {
            if let Some(serde_json::Value::String(target)) = map.get("pipe") {
                return CommonValue::Pipe(target.clone());
            }
        }
    }
    CommonValue::Literal(value)
}
