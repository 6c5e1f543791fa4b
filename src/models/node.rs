use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::template::{null_as_default, NodeTemplate};

/// Node data as the canvas hands it to a node view (`data` of a flow node).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NodeInstance {
    pub id: String,
    /// Declared component type, e.g. `LLMChain`. May be empty for nodes
    /// loaded from a damaged file.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub node_type: String,
    pub node: NodeDescriptor,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct NodeDescriptor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub template: NodeTemplate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl NodeInstance {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>, node: NodeDescriptor) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            node,
        }
    }
}
