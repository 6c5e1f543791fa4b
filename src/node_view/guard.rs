use super::host::NodeHost;
use crate::models::{ErrorAlert, NodeInstance};
use crate::styles::NodeStyleTables;

pub fn unrenderable_message(node_type: &str) -> String {
    if node_type.is_empty() {
        "There was a node that can't be rendered, please review your json file".to_string()
    } else {
        format!(
            "The {} node could not be rendered, please review your json file",
            node_type
        )
    }
}

/// Decides whether a node can be drawn at all.
///
/// A node whose type resolves to no icon is reported to the user and removed
/// from the graph. The report and the removal request happen once per mounted
/// view; the latch lives as long as the guard and a remount starts fresh.
#[derive(Debug, Default)]
pub struct RenderGuard {
    reported: bool,
}

impl RenderGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Icon to draw, or `None` when the node must not render.
    pub fn resolve(
        &mut self,
        node: &NodeInstance,
        styles: &NodeStyleTables,
        host: &NodeHost,
    ) -> Option<String> {
        if let Some(icon) = styles.icon_for(&node.node_type) {
            return Some(icon.to_string());
        }
        if !self.reported {
            self.reported = true;
            log::warn!(
                "Removing node {}: no icon for type '{}'",
                node.id,
                node.node_type
            );
            host.alerts.set_error(ErrorAlert {
                title: unrenderable_message(&node.node_type),
                list: Vec::new(),
            });
            host.graph.delete_node(&node.id);
        }
        None
    }

    pub fn has_reported(&self) -> bool {
        self.reported
    }
}
