//! Frontend Models
//!
//! Data structures matching the backend's JSON contract.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Server-assigned todo identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Description, if the server sent a non-empty one
    pub fn description(&self) -> Option<&str> {
        Some(self.description.as_str()).filter(|d| !d.is_empty())
    }

    /// Request body that flips the completion flag and keeps everything else
    pub fn toggle_request(&self) -> TodoRequest {
        TodoRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            completed: !self.completed,
        }
    }
}

/// Body for POST /todos and PUT /todos/{id}
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoRequest {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TodoRequest {
    /// Build a request from raw form input, trimming both text fields.
    ///
    /// A blank title is rejected before anything reaches the network.
    pub fn from_input(title: &str, description: &str, completed: bool) -> ClientResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ClientError::Validation("Title is required".to_string()));
        }
        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
            completed,
        })
    }
}

/// Standard response envelope: `{ success, message?, data? }`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "none")]
    pub data: Option<T>,
}

// `#[serde(default)]` would require `T: Default`
fn none<T>() -> Option<T> {
    None
}

impl<T> ApiResponse<T> {
    /// Check the success flag and hand back the (possibly absent) payload
    pub fn into_result(self) -> ClientResult<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            let message = self
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "request was not successful".to_string());
            Err(ClientError::Server(message))
        }
    }

    /// Like `into_result`, but a successful envelope must carry data
    pub fn into_data(self) -> ClientResult<T> {
        self.into_result()?
            .ok_or_else(|| ClientError::Decode("response is missing `data`".to_string()))
    }
}

/// Body of GET /health
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODO_JSON: &str = r#"{
        "id": 7,
        "title": "Buy milk",
        "description": "",
        "completed": false,
        "created_at": "2024-03-01T10:15:00.123456+01:00",
        "updated_at": "2024-03-01T10:15:00Z"
    }"#;

    #[test]
    fn test_todo_deserializes_backend_shape() {
        let todo: Todo = serde_json::from_str(TODO_JSON).unwrap();
        assert_eq!(todo.id, TodoId(7));
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description(), None);
        assert_eq!(todo.created_at.to_rfc3339(), "2024-03-01T09:15:00.123456+00:00");
    }

    #[test]
    fn test_toggle_request_flips_only_completed() {
        let mut todo: Todo = serde_json::from_str(TODO_JSON).unwrap();
        todo.description = "2 litres".to_string();
        let req = todo.toggle_request();
        assert_eq!(req.title, "Buy milk");
        assert_eq!(req.description, "2 litres");
        assert!(req.completed);
    }

    #[test]
    fn test_request_from_input_trims_and_validates() {
        let req = TodoRequest::from_input("  Buy milk ", " semi ", false).unwrap();
        assert_eq!(req.title, "Buy milk");
        assert_eq!(req.description, "semi");

        let err = TodoRequest::from_input("   ", "x", false).unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn test_envelope_without_data() {
        let resp: ApiResponse<Vec<Todo>> =
            serde_json::from_str(r#"{"success":true,"message":"ok"}"#).unwrap();
        assert_eq!(resp.into_result().unwrap(), None);
    }

    #[test]
    fn test_envelope_failure_uses_message() {
        let resp: ApiResponse<Todo> =
            serde_json::from_str(r#"{"success":false,"message":"Todo not found"}"#).unwrap();
        match resp.into_data() {
            Err(ClientError::Server(msg)) => assert_eq!(msg, "Todo not found"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_envelope_success_missing_data_is_decode_error() {
        let resp: ApiResponse<Todo> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(resp.into_data(), Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status":"ok","message":"Todo API is running"}"#).unwrap();
        assert!(health.is_ok());
    }
}
