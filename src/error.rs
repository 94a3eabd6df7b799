//! Client Errors
//!
//! Every failure the client can surface, local or remote.

use crate::models::TodoId;

/// Common result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Input rejected locally; no request was sent
    Validation(String),
    /// Transport failure (connection refused, CORS, aborted fetch...)
    Network(String),
    /// Server answered `success: false` or a non-JSON error body
    Server(String),
    /// Response body could not be decoded
    Decode(String),
    /// Identifier is not in the local collection
    NotFound(TodoId),
    /// Malformed configuration
    Config(String),
}

impl ClientError {
    /// Validation errors are shown inline, everything else as a banner
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Validation(msg) => write!(f, "{}", msg),
            ClientError::Network(msg) => write!(f, "Connection error: {}", msg),
            ClientError::Server(msg) => write!(f, "{}", msg),
            ClientError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            ClientError::NotFound(id) => write!(f, "Todo {} is not in the local list", id),
            ClientError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ClientError::NotFound(TodoId(3)).to_string(), "Todo 3 is not in the local list");
        assert_eq!(ClientError::Network("refused".into()).to_string(), "Connection error: refused");
        assert!(ClientError::Validation("Title is required".into()).is_validation());
        assert!(!ClientError::Server("boom".into()).is_validation());
    }
}
