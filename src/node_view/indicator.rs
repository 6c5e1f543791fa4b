use crate::models::{StatusGlyph, StatusIndicator, StatusTooltip, ValidationStatus};

pub const VALIDATING_TOOLTIP: &str = "Validating...";

fn lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Exactly one glyph per status.
pub fn status_indicator(status: &ValidationStatus) -> StatusIndicator {
    match status {
        ValidationStatus::Pending => StatusIndicator {
            glyph: StatusGlyph::Pending,
            accent: "yellow".into(),
            tooltip: StatusTooltip::Text(VALIDATING_TOOLTIP.into()),
        },
        ValidationStatus::Result { valid: true, params } => StatusIndicator {
            glyph: StatusGlyph::Valid,
            accent: "green".into(),
            tooltip: StatusTooltip::Lines(lines(params)),
        },
        ValidationStatus::Result { valid: false, params } => StatusIndicator {
            glyph: StatusGlyph::Invalid,
            accent: "red".into(),
            tooltip: StatusTooltip::Lines(lines(params)),
        },
        ValidationStatus::Error { reason } => StatusIndicator {
            glyph: StatusGlyph::Invalid,
            accent: "red".into(),
            tooltip: StatusTooltip::Lines(lines(reason)),
        },
    }
}
