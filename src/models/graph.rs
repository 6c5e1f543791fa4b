use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::node::NodeInstance;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

/// Whole-canvas snapshot as produced by the flow canvas (`toObject()`).
/// Node and edge payloads are opaque here; they are forwarded as-is to the
/// validation service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<Value>,
    #[serde(default)]
    pub edges: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
}

impl GraphSnapshot {
    /// An uninitialized canvas: nothing worth validating yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.viewport.is_none()
    }

    /// Reads a snapshot from either a bare `{nodes, edges, viewport}` object
    /// or a saved flow document wrapping it under `data`.
    pub fn from_flow_json(json: &str) -> Result<Self, String> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse flow JSON: {}", e))?;
        let graph = match value.get("data") {
            Some(data) if data.is_object() => data.clone(),
            _ => value,
        };
        serde_json::from_value(graph).map_err(|e| format!("Failed to read graph snapshot: {}", e))
    }

    /// Node data of the canvas node with the given id, if it parses.
    pub fn find_node(&self, node_id: &str) -> Option<NodeInstance> {
        self.nodes
            .iter()
            .find(|n| n.get("id").and_then(Value::as_str) == Some(node_id))
            .and_then(|n| n.get("data"))
            .and_then(|data| match serde_json::from_value(data.clone()) {
                Ok(node) => Some(node),
                Err(e) => {
                    log::warn!("Node '{}' has unreadable data: {}", node_id, e);
                    None
                }
            })
    }

    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|n| n.get("id").and_then(Value::as_str))
            .collect()
    }
}
