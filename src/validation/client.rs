// Remote node validation over HTTP

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::error::ValidationError;
use crate::models::{GraphSnapshot, ValidationReport};
use crate::settings::ViewSettings;

/// Sends a graph snapshot to the validation service for one node.
#[async_trait]
pub trait ValidationTransport: Send + Sync {
    async fn validate_node(
        &self,
        node_id: &str,
        snapshot: &GraphSnapshot,
    ) -> Result<ValidationReport, ValidationError>;
}

pub struct HttpValidationClient {
    client: Client,
    base_url: String,
}

impl HttpValidationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &ViewSettings) -> Result<Self, ValidationError> {
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|e| ValidationError::RequestFailed(e.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.validation_url.clone(),
        })
    }

    /// `{base}/validate/node/{node_id}` with the id percent-encoded as one
    /// path segment.
    pub fn endpoint(&self, node_id: &str) -> Result<Url, ValidationError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ValidationError::RequestFailed(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ValidationError::RequestFailed(format!(
                    "Base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["validate", "node", node_id]);
        Ok(url)
    }
}

#[async_trait]
impl ValidationTransport for HttpValidationClient {
    async fn validate_node(
        &self,
        node_id: &str,
        snapshot: &GraphSnapshot,
    ) -> Result<ValidationReport, ValidationError> {
        let url = self.endpoint(node_id)?;

        let res = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(snapshot)
            .send()
            .await
            .map_err(|e| ValidationError::RequestFailed(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let text = res.text().await.unwrap_or_default();
            return Err(ValidationError::ApiError {
                status,
                message: text,
            });
        }

        let body = res
            .text()
            .await
            .map_err(|e| ValidationError::ParseError(e.to_string()))?;

        decode_validation_body(&body)
    }
}

/// The service answers with a JSON string whose contents are the JSON
/// report, so the body is decoded twice.
pub fn decode_validation_body(body: &str) -> Result<ValidationReport, ValidationError> {
    let inner: String = serde_json::from_str(body).map_err(|e| {
        ValidationError::ParseError(format!("Response body is not a JSON string: {}", e))
    })?;
    serde_json::from_str(&inner)
        .map_err(|e| ValidationError::ParseError(format!("Failed to parse report: {}", e)))
}
