//! Parameter slots of a node, derived from its template.

use crate::models::{
    AdvancedBadge, NodeInstance, NodeTemplate, NodeTemplateEntry, SlotIdentity, SlotView,
};
use crate::styles::NodeStyleTables;

const UPPERCASE_WORDS: [&str; 11] = [
    "api", "url", "uri", "llm", "id", "ai", "json", "sql", "csv", "pdf", "html",
];

/// `max_tokens` -> `Max Tokens`, `openai_api_key` -> `Openai API Key`.
pub fn title_case(text: &str) -> String {
    text.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            if UPPERCASE_WORDS.contains(&lower.as_str()) {
                return lower.to_uppercase();
            }
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn slot_title(key: &str, entry: &NodeTemplateEntry) -> String {
    if let Some(display_name) = non_empty(&entry.display_name) {
        return display_name.to_string();
    }
    match non_empty(&entry.name) {
        Some(name) => title_case(name),
        None => title_case(key),
    }
}

pub fn type_tooltip(entry: &NodeTemplateEntry) -> String {
    if entry.list {
        format!("Type: {} list", entry.field_type)
    } else {
        format!("Type: {}", entry.field_type)
    }
}

/// Visible input slots in template order.
pub fn derive_input_slots(node: &NodeInstance, styles: &NodeStyleTables) -> Vec<SlotView> {
    node.node
        .template
        .params()
        .filter(|(_, entry)| entry.is_visible())
        .map(|(key, entry)| SlotView {
            id: SlotIdentity::input(&entry.field_type, key, &node.id),
            name: key.to_string(),
            title: slot_title(key, entry),
            tooltip: type_tooltip(entry),
            color: styles.color_for(&entry.field_type).to_string(),
            required: entry.required,
            connection_type: entry.field_type.clone(),
            left: true,
        })
        .collect()
}

pub fn derive_output_slot(node: &NodeInstance, styles: &NodeStyleTables) -> SlotView {
    let base_classes = &node.node.base_classes;
    SlotView {
        id: SlotIdentity::output(&node.node_type, &node.id, base_classes),
        name: node.node_type.clone(),
        title: node.node_type.clone(),
        tooltip: format!("Type: {}", base_classes.join(" | ")),
        color: styles.color_for(&node.node_type).to_string(),
        required: false,
        connection_type: base_classes.join("|"),
        left: false,
    }
}

/// Evaluated over every parameter, visible or not.
pub fn advanced_badge(template: &NodeTemplate) -> AdvancedBadge {
    let mut badge = AdvancedBadge::default();
    for (_, entry) in template.params() {
        badge.visible |= entry.advanced && entry.show;
        badge.required_marker |= entry.advanced && entry.required;
    }
    badge
}
