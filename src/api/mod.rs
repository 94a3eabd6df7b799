//! Todo API Bindings
//!
//! The backend's REST contract as a trait, so the controller can run
//! against the real HTTP client or an in-memory stand-in.

mod http;

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{HealthStatus, Todo, TodoId, TodoRequest};

pub use http::HttpTodoApi;

/// REST operations of the todo backend.
///
/// Futures are `?Send`: in the browser they run on the single JS thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// GET /todos
    async fn list_todos(&self) -> ClientResult<Vec<Todo>>;

    /// GET /todos/{id}
    async fn get_todo(&self, id: TodoId) -> ClientResult<Todo>;

    /// POST /todos
    async fn create_todo(&self, request: &TodoRequest) -> ClientResult<Todo>;

    /// PUT /todos/{id}
    async fn update_todo(&self, id: TodoId, request: &TodoRequest) -> ClientResult<Todo>;

    /// DELETE /todos/{id}
    async fn delete_todo(&self, id: TodoId) -> ClientResult<()>;

    /// GET /health
    async fn health(&self) -> ClientResult<HealthStatus>;
}

#[async_trait(?Send)]
impl<T: TodoApi + ?Sized> TodoApi for Rc<T> {
    async fn list_todos(&self) -> ClientResult<Vec<Todo>> {
        (**self).list_todos().await
    }

    async fn get_todo(&self, id: TodoId) -> ClientResult<Todo> {
        (**self).get_todo(id).await
    }

    async fn create_todo(&self, request: &TodoRequest) -> ClientResult<Todo> {
        (**self).create_todo(request).await
    }

    async fn update_todo(&self, id: TodoId, request: &TodoRequest) -> ClientResult<Todo> {
        (**self).update_todo(id, request).await
    }

    async fn delete_todo(&self, id: TodoId) -> ClientResult<()> {
        (**self).delete_todo(id).await
    }

    async fn health(&self) -> ClientResult<HealthStatus> {
        (**self).health().await
    }
}
