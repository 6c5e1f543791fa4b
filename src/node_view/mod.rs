//! View state of one node on the flow canvas.
//!
//! `NodeView` turns node data into a `NodeViewModel` for the frontend, keeps
//! the remote validation status of the node, and forwards the node's user
//! actions (details, delete) to the host services it was mounted with.

mod guard;
mod host;
mod indicator;
mod slots;

use std::sync::Arc;

use tokio::sync::watch;

pub use guard::{unrenderable_message, RenderGuard};
pub use host::{AlertSink, GraphEditor, NodeHost, PopupHost};
pub use indicator::{status_indicator, VALIDATING_TOOLTIP};
pub use slots::{
    advanced_badge, derive_input_slots, derive_output_slot, slot_title, title_case, type_tooltip,
};

use crate::models::{GraphSnapshot, NodeHeader, NodeInstance, NodeViewModel, ValidationStatus};
use crate::settings::ViewSettings;
use crate::styles::NodeStyleTables;
use crate::validation::{ValidationController, ValidationTransport};

pub struct NodeView {
    node: NodeInstance,
    styles: Arc<NodeStyleTables>,
    host: NodeHost,
    guard: RenderGuard,
    validation: ValidationController,
    selected: bool,
    deleted: bool,
}

impl NodeView {
    /// Mounts a view for `node`. Every mount starts with a fresh render guard
    /// and a pending validation status.
    pub fn new(
        node: NodeInstance,
        styles: Arc<NodeStyleTables>,
        host: NodeHost,
        transport: Arc<dyn ValidationTransport>,
        settings: &ViewSettings,
    ) -> Self {
        let validation = ValidationController::new(node.id.clone(), transport, settings.debounce());
        Self {
            node,
            styles,
            host,
            guard: RenderGuard::new(),
            validation,
            selected: false,
            deleted: false,
        }
    }

    pub fn node(&self) -> &NodeInstance {
        &self.node
    }

    pub fn node_id(&self) -> &str {
        &self.node.id
    }

    /// Replaces the node data handed down by the graph. The id must not change;
    /// a different node gets its own view. A type that resolves again lets
    /// validation resume; the unrenderable alert is not repeated.
    pub fn update_node(&mut self, node: NodeInstance) -> Result<(), String> {
        if node.id != self.node.id {
            return Err(format!(
                "Cannot update view of node '{}' with data of node '{}'",
                self.node.id, node.id
            ));
        }
        self.node = node;
        Ok(())
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Current view model, or `None` when the node cannot be drawn. In that
    /// case the node has been reported and its removal requested.
    pub fn render(&mut self) -> Option<NodeViewModel> {
        let Some(icon) = self.guard.resolve(&self.node, &self.styles, &self.host) else {
            self.validation.cancel_pending();
            return None;
        };

        let node = &self.node;
        Some(NodeViewModel {
            node_id: node.id.clone(),
            selected: self.selected,
            header: NodeHeader {
                icon,
                color: self.styles.color_for(&node.node_type).to_string(),
                title: node.node_type.clone(),
            },
            description: node.node.description.clone(),
            status: status_indicator(&self.validation.status()),
            advanced: advanced_badge(&node.node.template),
            inputs: derive_input_slots(node, &self.styles),
            output: derive_output_slot(node, &self.styles),
        })
    }

    /// Graph changed somewhere; schedule a validation of this node against
    /// the new snapshot. Ignored after `delete` and while the node type has
    /// no icon.
    pub fn observe_graph(&self, snapshot: GraphSnapshot) {
        if self.deleted || self.styles.icon_for(&self.node.node_type).is_none() {
            log::debug!("Not validating {}: node is not on the canvas", self.node.id);
            return;
        }
        self.validation.observe(snapshot);
    }

    pub fn validation_status(&self) -> ValidationStatus {
        self.validation.status()
    }

    /// Fires whenever the validation status changes; re-render on change.
    pub fn subscribe_status(&self) -> watch::Receiver<ValidationStatus> {
        self.validation.subscribe()
    }

    /// Settings button: open the detail editor with the full template.
    pub fn open_details(&self) {
        self.host.popups.open_node_details(&self.node);
    }

    /// Trash button. No validation is scheduled for this view afterwards.
    pub fn delete(&mut self) {
        self.deleted = true;
        self.validation.cancel_pending();
        self.host.graph.delete_node(&self.node.id);
    }
}

#[cfg(test)]
mod tests;
