use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Decoded payload of the validation service.
#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[ts(export, export_to = "node_view.ts")]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(default)]
    pub params: String,
}

/// Remote validation state of one node.
#[derive(TS, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(tag = "status", rename_all = "camelCase")]
#[ts(export, export_to = "node_view.ts")]
pub enum ValidationStatus {
    /// No response yet for the latest dispatched request.
    #[default]
    Pending,
    Result { valid: bool, params: String },
    /// Transport or decode failure.
    Error { reason: String },
}

impl ValidationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, ValidationStatus::Pending)
    }
}

impl From<ValidationReport> for ValidationStatus {
    fn from(report: ValidationReport) -> Self {
        ValidationStatus::Result {
            valid: report.valid,
            params: report.params,
        }
    }
}
