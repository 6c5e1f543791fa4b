use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use super::*;
use crate::models::{ErrorAlert, StatusGlyph, StatusTooltip, ValidationReport};
use crate::validation::ValidationError;

#[derive(Default)]
struct RecordingHost {
    alerts: Mutex<Vec<ErrorAlert>>,
    deleted: Mutex<Vec<String>>,
    opened: Mutex<Vec<String>>,
}

impl AlertSink for RecordingHost {
    fn set_error(&self, alert: ErrorAlert) {
        self.alerts.lock().unwrap().push(alert);
    }
}

impl GraphEditor for RecordingHost {
    fn delete_node(&self, node_id: &str) {
        self.deleted.lock().unwrap().push(node_id.to_string());
    }
}

impl PopupHost for RecordingHost {
    fn open_node_details(&self, node: &NodeInstance) {
        self.opened.lock().unwrap().push(node.id.clone());
    }
}

struct FixedTransport {
    calls: Mutex<usize>,
    result: Result<ValidationReport, ValidationError>,
}

#[async_trait]
impl ValidationTransport for FixedTransport {
    async fn validate_node(
        &self,
        _node_id: &str,
        _snapshot: &GraphSnapshot,
    ) -> Result<ValidationReport, ValidationError> {
        *self.calls.lock().unwrap() += 1;
        self.result.clone()
    }
}

fn host(recorder: &Arc<RecordingHost>) -> NodeHost {
    NodeHost::new(recorder.clone(), recorder.clone(), recorder.clone())
}

fn styles() -> Arc<NodeStyleTables> {
    Arc::new(NodeStyleTables::default().with_types_from_catalog(&json!({
        "chains": { "LLMChain": { "base_classes": ["LLMChain", "Chain"] } },
        "llms": { "OpenAI": { "base_classes": ["OpenAI", "BaseLLM"] } },
        "prompts": { "PromptTemplate": { "base_classes": ["BasePromptTemplate"] } }
    })))
}

fn llm_chain(node_type: &str) -> NodeInstance {
    serde_json::from_value(json!({
        "id": "LLMChain-7",
        "type": node_type,
        "node": {
            "description": "Chain to run queries against LLMs.",
            "base_classes": ["LLMChain", "Chain"],
            "template": {
                "llm": { "type": "BaseLLM", "show": true, "required": true, "name": "llm" },
                "prompt": { "type": "BasePromptTemplate", "show": true, "required": true },
                "memory": { "type": "BaseMemory", "show": true, "advanced": true },
                "verbose": { "type": "bool", "show": false, "advanced": true, "required": true },
                "_type": "LLMChain"
            }
        }
    }))
    .unwrap()
}

fn transport(result: Result<ValidationReport, ValidationError>) -> Arc<FixedTransport> {
    Arc::new(FixedTransport {
        calls: Mutex::new(0),
        result,
    })
}

/// For tests that never reach the validation service.
fn idle_transport() -> Arc<FixedTransport> {
    transport(Err(ValidationError::ParseError("not expected".into())))
}

fn view(
    node: NodeInstance,
    recorder: &Arc<RecordingHost>,
    transport: Arc<FixedTransport>,
) -> NodeView {
    NodeView::new(node, styles(), host(recorder), transport, &ViewSettings::default())
}

fn graph() -> GraphSnapshot {
    GraphSnapshot {
        nodes: vec![json!({ "id": "LLMChain-7" })],
        ..Default::default()
    }
}

#[test]
fn renders_header_slots_and_badge() {
    let recorder = Arc::new(RecordingHost::default());
    let mut view = view(llm_chain("LLMChain"), &recorder, idle_transport());
    view.set_selected(true);

    let model = view.render().expect("known type renders");
    assert!(model.selected);
    assert_eq!(model.header.icon, "link");
    assert_eq!(model.header.color, "#FE7500");
    assert_eq!(model.header.title, "LLMChain");
    assert_eq!(model.description, "Chain to run queries against LLMs.");
    assert_eq!(model.status.glyph, StatusGlyph::Pending);

    let ids: Vec<&str> = model.inputs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["BaseLLM|llm|LLMChain-7", "BasePromptTemplate|prompt|LLMChain-7"]
    );
    assert_eq!(model.inputs[0].title, "LLM");
    assert_eq!(model.inputs[0].color, "#6344BE");
    assert_eq!(model.output.id.as_str(), "LLMChain|LLMChain-7|LLMChain|Chain");

    assert!(model.advanced.visible);
    assert!(model.advanced.required_marker);
    assert!(recorder.alerts.lock().unwrap().is_empty());
}

#[test]
fn rendering_twice_gives_identical_identities() {
    let recorder = Arc::new(RecordingHost::default());
    let mut view = view(llm_chain("LLMChain"), &recorder, idle_transport());
    let first = view.render().unwrap();
    let second = view.render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn unknown_type_reports_and_deletes_once() {
    let recorder = Arc::new(RecordingHost::default());
    let mut view = view(llm_chain("NoSuchNode"), &recorder, idle_transport());

    for _ in 0..4 {
        assert!(view.render().is_none());
    }

    let alerts = recorder.alerts.lock().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(
        alerts[0].title,
        "The NoSuchNode node could not be rendered, please review your json file"
    );
    assert_eq!(*recorder.deleted.lock().unwrap(), vec!["LLMChain-7".to_string()]);
}

#[test]
fn missing_type_uses_generic_message() {
    let recorder = Arc::new(RecordingHost::default());
    let mut view = view(llm_chain(""), &recorder, idle_transport());
    assert!(view.render().is_none());
    assert_eq!(
        recorder.alerts.lock().unwrap()[0].title,
        "There was a node that can't be rendered, please review your json file"
    );
}

#[test]
fn remount_reports_again() {
    let recorder = Arc::new(RecordingHost::default());
    for _ in 0..2 {
        let mut view = view(llm_chain("NoSuchNode"), &recorder, idle_transport());
        view.render();
        view.render();
    }
    assert_eq!(recorder.alerts.lock().unwrap().len(), 2);
    assert_eq!(recorder.deleted.lock().unwrap().len(), 2);
}

#[test]
fn user_actions_reach_the_host() {
    let recorder = Arc::new(RecordingHost::default());
    let mut view = view(llm_chain("LLMChain"), &recorder, idle_transport());
    view.open_details();
    view.delete();
    assert_eq!(*recorder.opened.lock().unwrap(), vec!["LLMChain-7".to_string()]);
    assert_eq!(*recorder.deleted.lock().unwrap(), vec!["LLMChain-7".to_string()]);
}

#[test]
fn update_node_keeps_identity() {
    let recorder = Arc::new(RecordingHost::default());
    let mut view = view(llm_chain("LLMChain"), &recorder, idle_transport());

    let mut edited = llm_chain("LLMChain");
    edited.node.description = "Edited".into();
    view.update_node(edited).unwrap();
    assert_eq!(view.node().node.description, "Edited");
    assert_eq!(view.render().unwrap().description, "Edited");

    let mut other = llm_chain("LLMChain");
    other.id = "LLMChain-8".into();
    assert!(view.update_node(other).is_err());
    assert_eq!(view.node_id(), "LLMChain-7");
}

#[tokio::test(start_paused = true)]
async fn validation_result_shows_in_the_indicator() {
    let recorder = Arc::new(RecordingHost::default());
    let transport = transport(Ok(ValidationReport {
        valid: true,
        params: "a\nb".into(),
    }));
    let mut view = view(llm_chain("LLMChain"), &recorder, transport.clone());
    let mut status = view.subscribe_status();

    for _ in 0..3 {
        view.observe_graph(graph());
    }
    status
        .wait_for(|s| !s.is_pending())
        .await
        .expect("view alive");

    let model = view.render().unwrap();
    assert_eq!(model.status.glyph, StatusGlyph::Valid);
    assert_eq!(
        model.status.tooltip,
        StatusTooltip::Lines(vec!["a".into(), "b".into()])
    );
    assert_eq!(*transport.calls.lock().unwrap(), 1);
}

#[tokio::test(start_paused = true)]
async fn transport_failure_shows_invalid_glyph() {
    let recorder = Arc::new(RecordingHost::default());
    let transport = transport(Err(ValidationError::ApiError {
        status: 500,
        message: "boom".into(),
    }));
    let mut view = view(llm_chain("LLMChain"), &recorder, transport);
    view.observe_graph(graph());
    tokio::time::sleep(Duration::from_secs(2)).await;

    let model = view.render().unwrap();
    assert_eq!(model.status.glyph, StatusGlyph::Invalid);
    assert!(matches!(view.validation_status(), ValidationStatus::Error { .. }));
}

#[tokio::test(start_paused = true)]
async fn unrenderable_node_stops_validating() {
    let recorder = Arc::new(RecordingHost::default());
    let transport = transport(Ok(ValidationReport {
        valid: true,
        params: String::new(),
    }));
    let mut view = view(llm_chain("NoSuchNode"), &recorder, transport.clone());

    view.observe_graph(graph());
    assert!(view.render().is_none());
    view.observe_graph(graph());
    tokio::time::sleep(Duration::from_secs(3)).await;

    assert_eq!(*transport.calls.lock().unwrap(), 0);
}

#[tokio::test(start_paused = true)]
async fn delete_cancels_scheduled_validation() {
    let recorder = Arc::new(RecordingHost::default());
    let transport = transport(Ok(ValidationReport {
        valid: true,
        params: String::new(),
    }));
    let mut view = view(llm_chain("LLMChain"), &recorder, transport.clone());

    view.observe_graph(graph());
    view.delete();
    view.observe_graph(graph());
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(*transport.calls.lock().unwrap(), 0);
    assert!(view.validation_status().is_pending());
}

#[tokio::test(start_paused = true)]
async fn validation_resumes_once_the_type_resolves() {
    let recorder = Arc::new(RecordingHost::default());
    let transport = transport(Ok(ValidationReport {
        valid: true,
        params: "ok".into(),
    }));
    let mut view = view(llm_chain("NoSuchNode"), &recorder, transport.clone());
    assert!(view.render().is_none());
    assert!(view.guard.has_reported());

    view.update_node(llm_chain("LLMChain")).unwrap();
    let mut status = view.subscribe_status();
    view.observe_graph(graph());
    status
        .wait_for(|s| !s.is_pending())
        .await
        .expect("view alive");

    let model = view.render().unwrap();
    assert_eq!(model.status.glyph, StatusGlyph::Valid);
    assert_eq!(*transport.calls.lock().unwrap(), 1);
    assert_eq!(recorder.alerts.lock().unwrap().len(), 1);
}

#[test]
fn null_type_is_reported_with_the_generic_message() {
    let recorder = Arc::new(RecordingHost::default());
    let mut raw = serde_json::to_value(llm_chain("LLMChain")).unwrap();
    raw["type"] = serde_json::Value::Null;
    raw["node"]["template"]["llm"]["advanced"] = serde_json::Value::Null;
    let node: NodeInstance = serde_json::from_value(raw).unwrap();

    let mut view = view(node, &recorder, idle_transport());
    assert!(view.render().is_none());
    assert_eq!(
        recorder.alerts.lock().unwrap()[0].title,
        "There was a node that can't be rendered, please review your json file"
    );
}
