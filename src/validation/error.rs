use std::fmt;

/// Failure of one remote validation round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Request could not be built or sent (connection refused, timeout...)
    RequestFailed(String),
    /// Service answered with a non-success status
    ApiError { status: u16, message: String },
    /// Body did not decode into a validation report
    ParseError(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            ValidationError::ApiError { status, message } => {
                write!(f, "Validation API error {}: {}", status, message)
            }
            ValidationError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}
