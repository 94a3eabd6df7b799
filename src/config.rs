//! Client Configuration
//!
//! Layers, lowest first: built-in defaults, the `TODO_API_BASE_URL`
//! build-time variable, then an optional JSON blob embedded in the page as
//! `<script id="todo-config" type="application/json">`.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Element id of the runtime config blob in the host page
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the todo API, without trailing slash
    pub api_base_url: String,
    /// How long an error banner stays up
    pub error_dismiss_ms: u32,
    /// How long a success notice stays up
    pub notice_dismiss_ms: u32,
}

/// A partial config as found in one layer
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    api_base_url: Option<String>,
    error_dismiss_ms: Option<u32>,
    notice_dismiss_ms: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            error_dismiss_ms: 5000,
            notice_dismiss_ms: 3000,
        }
    }
}

impl ClientConfig {
    /// Defaults plus the build-time base URL override
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("TODO_API_BASE_URL") {
            config.api_base_url = url.to_string();
        }
        config
    }

    /// Parse the page JSON over the build-time layer
    pub fn from_json(json: &str) -> ClientResult<Self> {
        Self::from_env().with_json_layer(json)
    }

    /// Apply a JSON layer; only the fields it names are overridden
    pub fn with_json_layer(self, json: &str) -> ClientResult<Self> {
        let layer: ConfigLayer = serde_json::from_str(json)
            .map_err(|e| ClientError::Config(e.to_string()))?;
        self.merge(layer).normalized()
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(url) = layer.api_base_url {
            self.api_base_url = url;
        }
        if let Some(ms) = layer.error_dismiss_ms {
            self.error_dismiss_ms = ms;
        }
        if let Some(ms) = layer.notice_dismiss_ms {
            self.notice_dismiss_ms = ms;
        }
        self
    }

    /// Resolve the full config for the running page
    pub fn from_document() -> ClientResult<Self> {
        let embedded = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .filter(|text| !text.trim().is_empty());

        match embedded {
            Some(json) => Self::from_json(&json),
            None => Self::from_env().normalized(),
        }
    }

    /// Strip trailing slashes and reject an empty base URL
    pub fn normalized(mut self) -> ClientResult<Self> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ClientError::Config("api_base_url must not be empty".to_string()));
        }
        self.api_base_url = trimmed.to_string();
        Ok(self)
    }

    /// Absolute URL for an API path such as `/todos`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.error_dismiss_ms, 5000);
        assert_eq!(config.notice_dismiss_ms, 3000);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = ClientConfig::default().with_json_layer(r#"{"api_base_url":"https://todo.example.com/api/v1/"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://todo.example.com/api/v1");
        assert_eq!(config.error_dismiss_ms, 5000);
    }

    #[test]
    fn test_json_layer_keeps_lower_layer_fields() {
        let build = ClientConfig {
            api_base_url: "https://prod.example.com/api/v1".to_string(),
            ..ClientConfig::default()
        };
        let config = build.clone().with_json_layer(r#"{"error_dismiss_ms":1000}"#).unwrap();
        assert_eq!(config.api_base_url, "https://prod.example.com/api/v1");
        assert_eq!(config.error_dismiss_ms, 1000);
        assert_eq!(config.notice_dismiss_ms, 3000);

        let empty = build.clone().with_json_layer("{}").unwrap();
        assert_eq!(empty, build);
    }

    #[test]
    fn test_from_json_starts_from_build_layer() {
        let config = ClientConfig::from_json(r#"{"notice_dismiss_ms":10}"#).unwrap();
        let build = ClientConfig::from_env().normalized().unwrap();
        assert_eq!(config.api_base_url, build.api_base_url);
        assert_eq!(config.notice_dismiss_ms, 10);
    }

    #[test]
    fn test_from_json_rejects_empty_url() {
        let err = ClientConfig::from_json(r#"{"api_base_url":"  / "}"#).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(ClientConfig::from_json("not json"), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("/todos"), "http://localhost:8080/api/v1/todos");
        assert_eq!(config.endpoint("health"), "http://localhost:8080/api/v1/health");
    }
}
