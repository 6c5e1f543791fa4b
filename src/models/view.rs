use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const SLOT_DELIMITER: char = '|';

/// Connection point id shared with the canvas edge wiring. Must stay
/// byte-stable for the same logical slot.
#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[ts(export, export_to = "node_view.ts")]
pub struct SlotIdentity(String);

/// Parts of an input slot id: `type|key|nodeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEndpoint<'a> {
    pub field_type: &'a str,
    pub key: &'a str,
    pub node_id: &'a str,
}

impl SlotIdentity {
    pub fn input(field_type: &str, key: &str, node_id: &str) -> Self {
        SlotIdentity(format!(
            "{}{d}{}{d}{}",
            field_type,
            key,
            node_id,
            d = SLOT_DELIMITER
        ))
    }

    pub fn output(node_type: &str, node_id: &str, base_classes: &[String]) -> Self {
        let mut parts: Vec<&str> = Vec::with_capacity(base_classes.len() + 2);
        parts.push(node_type);
        parts.push(node_id);
        parts.extend(base_classes.iter().map(String::as_str));
        let delimiter = SLOT_DELIMITER.to_string();
        SlotIdentity(parts.join(delimiter.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits an input id. The type is the first segment and the node id the
    /// last; whatever sits between them is the template key.
    pub fn input_parts(&self) -> Option<InputEndpoint<'_>> {
        let (field_type, rest) = self.0.split_once(SLOT_DELIMITER)?;
        let (key, node_id) = rest.rsplit_once(SLOT_DELIMITER)?;
        Some(InputEndpoint {
            field_type,
            key,
            node_id,
        })
    }

    /// Splits an output id into node type, node id and base classes.
    pub fn output_parts(&self) -> Option<(&str, &str, Vec<&str>)> {
        let mut segments = self.0.split(SLOT_DELIMITER);
        let node_type = segments.next()?;
        let node_id = segments.next()?;
        Some((node_type, node_id, segments.collect()))
    }
}

impl std::fmt::Display for SlotIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One connection handle on the node. Inputs sit on the left edge, the
/// single output on the right.
#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "node_view.ts")]
#[ts(rename_all = "camelCase")]
pub struct SlotView {
    pub id: SlotIdentity,
    /// Template key for inputs, node type for the output.
    pub name: String,
    pub title: String,
    pub tooltip: String,
    pub color: String,
    pub required: bool,
    /// Type the canvas checks edges against. For the output this is the
    /// `|`-joined base classes.
    pub connection_type: String,
    pub left: bool,
}

#[derive(TS, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "node_view.ts")]
#[ts(rename_all = "camelCase")]
pub struct AdvancedBadge {
    /// Some advanced field is marked `show`: the settings button is shown.
    pub visible: bool,
    /// Some advanced field is required: an asterisk is drawn on the button.
    pub required_marker: bool,
}

#[derive(TS, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "node_view.ts")]
pub enum StatusGlyph {
    Pending,
    Valid,
    Invalid,
}

#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
#[ts(export, export_to = "node_view.ts")]
pub enum StatusTooltip {
    Text(String),
    Lines(Vec<String>),
}

#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "node_view.ts")]
#[ts(rename_all = "camelCase")]
pub struct StatusIndicator {
    pub glyph: StatusGlyph,
    pub accent: String,
    pub tooltip: StatusTooltip,
}

#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "node_view.ts")]
#[ts(rename_all = "camelCase")]
pub struct NodeHeader {
    pub icon: String,
    pub color: String,
    pub title: String,
}

/// Everything the frontend needs to draw one node.
#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "node_view.ts")]
#[ts(rename_all = "camelCase")]
pub struct NodeViewModel {
    pub node_id: String,
    pub selected: bool,
    pub header: NodeHeader,
    pub description: String,
    pub status: StatusIndicator,
    pub advanced: AdvancedBadge,
    pub inputs: Vec<SlotView>,
    pub output: SlotView,
}

/// Message handed to the alert service.
#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "node_view.ts")]
pub struct ErrorAlert {
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list: Vec<String>,
}
