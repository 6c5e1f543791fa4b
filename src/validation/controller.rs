//! Debounced remote validation for one node.
//!
//! Every graph change restarts a quiet-period timer. When the timer fires the
//! latest snapshot is sent to the validation service and the node status is
//! updated from the answer. Only the timer is cancellable: once a request is
//! dispatched it runs to completion, and a slow answer may land after a newer
//! one.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use super::client::ValidationTransport;
use crate::models::{GraphSnapshot, ValidationStatus};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

pub struct ValidationController {
    node_id: String,
    transport: Arc<dyn ValidationTransport>,
    debounce: Duration,
    status: Arc<watch::Sender<ValidationStatus>>,
    /// Timer of the scheduled (not yet dispatched) validation, if any.
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl ValidationController {
    pub fn new(
        node_id: impl Into<String>,
        transport: Arc<dyn ValidationTransport>,
        debounce: Duration,
    ) -> Self {
        let (status, _) = watch::channel(ValidationStatus::Pending);
        Self {
            node_id: node_id.into(),
            transport,
            debounce,
            status: Arc::new(status),
            pending: Mutex::new(None),
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn status(&self) -> ValidationStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ValidationStatus> {
        self.status.subscribe()
    }

    /// Records a graph change. Replaces any scheduled validation with one for
    /// `snapshot`, fired after the quiet period. Empty snapshots are ignored.
    /// Must be called from within a tokio runtime.
    pub fn observe(&self, snapshot: GraphSnapshot) {
        if snapshot.is_empty() {
            log::debug!("Skipping validation of {}: graph is empty", self.node_id);
            return;
        }
        let Ok(runtime) = Handle::try_current() else {
            log::warn!(
                "Cannot schedule validation of {}: no async runtime",
                self.node_id
            );
            return;
        };

        let mut pending = self.pending.lock().expect("validation timer poisoned");
        if let Some(timer) = pending.take() {
            timer.abort();
        }

        let node_id = self.node_id.clone();
        let transport = self.transport.clone();
        let status = self.status.clone();
        let deadline = Instant::now() + self.debounce;
        let dispatcher = runtime.clone();
        *pending = Some(runtime.spawn(async move {
            sleep_until(deadline).await;
            // Detached so that a later abort of this timer leaves the
            // request running.
            dispatcher.spawn(dispatch(node_id, transport, status, snapshot));
        }));
    }

    /// Drops the scheduled validation, if it has not fired yet.
    pub fn cancel_pending(&self) {
        let mut pending = self.pending.lock().expect("validation timer poisoned");
        if let Some(timer) = pending.take() {
            timer.abort();
        }
    }

    pub fn has_scheduled(&self) -> bool {
        let pending = self.pending.lock().expect("validation timer poisoned");
        pending.as_ref().is_some_and(|timer| !timer.is_finished())
    }
}

impl Drop for ValidationController {
    fn drop(&mut self) {
        if let Ok(pending) = self.pending.get_mut() {
            if let Some(timer) = pending.take() {
                timer.abort();
            }
        }
    }
}

async fn dispatch(
    node_id: String,
    transport: Arc<dyn ValidationTransport>,
    status: Arc<watch::Sender<ValidationStatus>>,
    snapshot: GraphSnapshot,
) {
    status.send_replace(ValidationStatus::Pending);
    log::debug!(
        "Validating {} against a graph of {} nodes",
        node_id,
        snapshot.nodes.len()
    );

    let next = match transport.validate_node(&node_id, &snapshot).await {
        Ok(report) => {
            log::debug!("Validation of {} finished: valid={}", node_id, report.valid);
            ValidationStatus::from(report)
        }
        Err(e) => {
            log::warn!("Validation of {} failed: {}", node_id, e);
            ValidationStatus::Error {
                reason: e.to_string(),
            }
        }
    };
    status.send_replace(next);
}
