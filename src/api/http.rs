//! HTTP Todo API
//!
//! `reqwest` client for the backend. On wasm32 reqwest rides on `fetch`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};

use super::TodoApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{ApiResponse, HealthStatus, Todo, TodoId, TodoRequest};

pub struct HttpTodoApi {
    client: Client,
    config: ClientConfig,
}

impl HttpTodoApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn todos_url(&self) -> String {
        self.config.endpoint("/todos")
    }

    fn todo_url(&self, id: TodoId) -> String {
        let segment = id.to_string();
        format!("{}/{}", self.todos_url(), utf8_percent_encode(&segment, NON_ALPHANUMERIC))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        log::debug!("[API] {} {}", method, url);
        self.client.request(method, url)
    }

    /// Send and decode the `{ success, message, data }` envelope
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<ApiResponse<T>> {
        let response = builder.send().await.map_err(|e| {
            log::warn!("[API] request failed: {}", e);
            ClientError::from(e)
        })?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_envelope(status, &body)
    }
}

/// Decode a response body into the envelope.
///
/// Error statuses with an envelope body are left to the envelope's
/// `success`/`message`; error statuses with any other body become
/// `Server("HTTP <status>: <body>")`.
pub(crate) fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> ClientResult<ApiResponse<T>> {
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(envelope) => Ok(envelope),
        Err(e) if (200..300).contains(&status) => {
            log::warn!("[API] undecodable {} response: {}", status, e);
            Err(ClientError::from(e))
        }
        Err(_) => {
            let detail = body.trim();
            let detail = if detail.is_empty() { "no response body" } else { detail };
            Err(ClientError::Server(format!("HTTP {}: {}", status, detail)))
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list_todos(&self) -> ClientResult<Vec<Todo>> {
        let url = self.todos_url();
        let envelope: ApiResponse<Vec<Todo>> = self.send(self.request(Method::GET, &url)).await?;
        Ok(envelope.into_result()?.unwrap_or_default())
    }

    async fn get_todo(&self, id: TodoId) -> ClientResult<Todo> {
        let url = self.todo_url(id);
        self.send(self.request(Method::GET, &url)).await?.into_data()
    }

    async fn create_todo(&self, request: &TodoRequest) -> ClientResult<Todo> {
        let url = self.todos_url();
        self.send(self.request(Method::POST, &url).json(request)).await?.into_data()
    }

    async fn update_todo(&self, id: TodoId, request: &TodoRequest) -> ClientResult<Todo> {
        let url = self.todo_url(id);
        self.send(self.request(Method::PUT, &url).json(request)).await?.into_data()
    }

    async fn delete_todo(&self, id: TodoId) -> ClientResult<()> {
        let url = self.todo_url(id);
        let envelope: ApiResponse<IgnoredAny> = self.send(self.request(Method::DELETE, &url)).await?;
        envelope.into_result().map(|_| ())
    }

    async fn health(&self) -> ClientResult<HealthStatus> {
        let url = self.config.endpoint("/health");
        let response = self.request(Method::GET, &url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Server(format!("HTTP {}", status.as_u16())));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_url_encodes_id() {
        let api = HttpTodoApi::new(ClientConfig::default());
        assert_eq!(api.todo_url(TodoId(42)), "http://localhost:8080/api/v1/todos/42");
    }

    #[test]
    fn test_decode_success_envelope() {
        let envelope: ApiResponse<Vec<Todo>> =
            decode_envelope(200, r#"{"success":true,"message":"ok","data":[]}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(vec![]));
    }

    #[test]
    fn test_decode_error_envelope_keeps_server_message() {
        let envelope: ApiResponse<Todo> =
            decode_envelope(404, r#"{"success":false,"message":"Todo not found"}"#).unwrap();
        assert_eq!(envelope.into_data(), Err(ClientError::Server("Todo not found".to_string())));
    }

    #[test]
    fn test_decode_plain_text_error_body() {
        let err = decode_envelope::<Todo>(400, "Invalid ID\n").unwrap_err();
        assert_eq!(err, ClientError::Server("HTTP 400: Invalid ID".to_string()));
    }

    #[test]
    fn test_decode_garbage_success_body() {
        let err = decode_envelope::<Todo>(200, "<html>").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_decode_delete_envelope_ignores_data() {
        let envelope: ApiResponse<IgnoredAny> =
            decode_envelope(200, r#"{"success":true,"message":"Todo deleted"}"#).unwrap();
        assert!(envelope.into_result().is_ok());
    }
}
