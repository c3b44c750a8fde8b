use itertools::Itertools;

use crate::component::ComponentDefinition;

/// Formats component metadata into the explorer's description panel text:
/// name, tags, timeout in minutes, resource requests and docstring.
pub struct SummaryFormatter;

impl SummaryFormatter {
    pub fn render_summary(definition: &ComponentDefinition) -> String {
        let mut out = String::new();
        out.push_str(&definition.name);
        out.push('\n');
        out.push_str(&format!(
            "Tags: [{}]\n",
            definition.metadata.tags.iter().join(", ")
        ));
        if let Some(timeout) = definition.metadata.timeout_secs {
            out.push_str(&format!("Timeout: {} min\n", timeout / 60.0));
        }
        out.push_str("Resource requests:\n");
        for request in &definition.resource_requests {
            out.push_str(&format!(
                "  {} = {}({})\n",
                request.name,
                request.kind,
                serde_json::Value::Object(request.params.clone())
            ));
        }
        if let Some(doc) = &definition.metadata.doc {
            out.push('\n');
            out.push_str(doc);
            out.push('\n');
        }
        out
    }
}
