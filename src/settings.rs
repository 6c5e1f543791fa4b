use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const VALIDATION_URL_KEY: &str = "validation_url";
pub const DEBOUNCE_MS_KEY: &str = "validation_debounce_ms";
pub const TIMEOUT_MS_KEY: &str = "validation_timeout_ms";

const ENV_VALIDATION_URL: &str = "FLOW_VALIDATION_URL";
const ENV_DEBOUNCE_MS: &str = "FLOW_VALIDATION_DEBOUNCE_MS";
const ENV_TIMEOUT_MS: &str = "FLOW_VALIDATION_TIMEOUT_MS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewSettings {
    /// Base URL of the backend serving `/validate/node/{id}`.
    pub validation_url: String,
    /// Quiet period after the last graph change before validating.
    pub validation_debounce_ms: u64,
    pub validation_timeout_ms: u64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            validation_url: "http://127.0.0.1:7860".to_string(),
            validation_debounce_ms: 1000,
            validation_timeout_ms: 30_000,
        }
    }
}

impl ViewSettings {
    /// Builds settings from stored key/value pairs. Missing or unparsable
    /// values fall back to the default for that key.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        Self {
            validation_url: map
                .get(VALIDATION_URL_KEY)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.validation_url),
            validation_debounce_ms: map
                .get(DEBOUNCE_MS_KEY)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.validation_debounce_ms),
            validation_timeout_ms: map
                .get(TIMEOUT_MS_KEY)
                .and_then(|v| v.trim().parse().ok())
                .filter(|ms: &u64| *ms > 0)
                .unwrap_or(defaults.validation_timeout_ms),
        }
    }

    pub fn from_env() -> Self {
        let mut map = HashMap::new();
        for (env_key, key) in [
            (ENV_VALIDATION_URL, VALIDATION_URL_KEY),
            (ENV_DEBOUNCE_MS, DEBOUNCE_MS_KEY),
            (ENV_TIMEOUT_MS, TIMEOUT_MS_KEY),
        ] {
            if let Ok(value) = std::env::var(env_key) {
                map.insert(key.to_string(), value);
            }
        }
        Self::from_map(&map)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.validation_debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.validation_timeout_ms)
    }
}
