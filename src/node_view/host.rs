use std::sync::Arc;

use crate::models::{ErrorAlert, NodeInstance};

/// User-facing error notifications.
pub trait AlertSink: Send + Sync {
    fn set_error(&self, alert: ErrorAlert);
}

/// The graph that owns the node.
pub trait GraphEditor: Send + Sync {
    fn delete_node(&self, node_id: &str);
}

/// Modal host for the node detail editor.
pub trait PopupHost: Send + Sync {
    fn open_node_details(&self, node: &NodeInstance);
}

/// Services a node view reports to. Handed in by the canvas when the view is
/// mounted.
#[derive(Clone)]
pub struct NodeHost {
    pub alerts: Arc<dyn AlertSink>,
    pub graph: Arc<dyn GraphEditor>,
    pub popups: Arc<dyn PopupHost>,
}

impl NodeHost {
    pub fn new(
        alerts: Arc<dyn AlertSink>,
        graph: Arc<dyn GraphEditor>,
        popups: Arc<dyn PopupHost>,
    ) -> Self {
        Self {
            alerts,
            graph,
            popups,
        }
    }
}
