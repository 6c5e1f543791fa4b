//! Renders one node of a saved flow and validates it against the backend.
//!
//! Prints the node view model as JSON, waits for one validation round and
//! prints the resulting status.
//!
//! Run with: cargo run --bin validate_node -- <flow.json> <node-id> [catalog.json]
//!
//! The backend is taken from FLOW_VALIDATION_URL (see `ViewSettings`).
//! Set RUST_LOG=debug to follow the validation cycle.

use std::sync::Arc;
use std::time::Duration;

use flow_node_view_lib::models::{ErrorAlert, GraphSnapshot, NodeInstance};
use flow_node_view_lib::{
    AlertSink, GraphEditor, HttpValidationClient, NodeHost, NodeStyleTables, NodeView, PopupHost,
    ViewSettings,
};

struct ConsoleHost;

impl AlertSink for ConsoleHost {
    fn set_error(&self, alert: ErrorAlert) {
        log::error!("{}", alert.title);
    }
}

impl GraphEditor for ConsoleHost {
    fn delete_node(&self, node_id: &str) {
        log::warn!("Node {} would be removed from the graph", node_id);
    }
}

impl PopupHost for ConsoleHost {
    fn open_node_details(&self, node: &NodeInstance) {
        log::info!("Details requested for {}", node.id);
    }
}

fn load_styles(catalog_path: Option<&String>) -> Result<NodeStyleTables, String> {
    let styles = NodeStyleTables::default();
    let Some(path) = catalog_path else {
        return Ok(styles);
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read catalog {}: {}", path, e))?;
    let catalog: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| format!("Failed to parse catalog: {}", e))?;
    Ok(styles.with_types_from_catalog(&catalog))
}

async fn run(args: &[String]) -> Result<(), String> {
    let [flow_path, node_id, rest @ ..] = args else {
        return Err("usage: validate_node <flow.json> <node-id> [catalog.json]".into());
    };

    let text = std::fs::read_to_string(flow_path)
        .map_err(|e| format!("Failed to read flow {}: {}", flow_path, e))?;
    let snapshot = GraphSnapshot::from_flow_json(&text)?;
    let node = snapshot
        .find_node(node_id)
        .ok_or_else(|| format!("Node '{}' not found in {}", node_id, flow_path))?;

    let settings = ViewSettings::from_env();
    let styles = Arc::new(load_styles(rest.first())?);
    let client = HttpValidationClient::from_settings(&settings).map_err(|e| e.to_string())?;
    let transport = Arc::new(client);
    let host = Arc::new(ConsoleHost);
    let mut view = NodeView::new(
        node,
        styles,
        NodeHost::new(host.clone(), host.clone(), host),
        transport,
        &settings,
    );

    let Some(model) = view.render() else {
        return Err(format!("Node '{}' cannot be rendered", node_id));
    };
    let json = serde_json::to_string_pretty(&model).map_err(|e| e.to_string())?;
    println!("{}", json);

    let mut status = view.subscribe_status();
    view.observe_graph(snapshot);
    let wait = settings.debounce() + settings.request_timeout() + Duration::from_secs(1);
    let outcome = tokio::time::timeout(wait, status.wait_for(|s| !s.is_pending()))
        .await
        .map_err(|_| "Timed out waiting for validation".to_string())?
        .map_err(|e| e.to_string())?
        .clone();

    let json = serde_json::to_string_pretty(&outcome).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
