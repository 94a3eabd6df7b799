//! Todo Controller
//!
//! Owns the application state and runs every user action through
//! validate -> request -> reconcile -> notify. State lives in a `RefCell`
//! and no borrow is held across an `.await`; listeners receive a reference
//! to the new state after every change.
//!
//! Requests are not serialized: two overlapping actions apply their
//! responses in arrival order.


use std::cell::{Cell, RefCell};
use std::future::Future;

use crate::api::TodoApi;
use crate::error::{ClientError, ClientResult};
use crate::models::{Todo, TodoId, TodoRequest};
use crate::store::{AppState, Banner, ServerStatus};
use crate::todo_list::Filter;

type Listener = Box<dyn Fn(&AppState)>;

pub struct TodoController<A> {
    api: A,
    state: RefCell<AppState>,
    listeners: RefCell<Vec<Listener>>,
    next_seq: Cell<u64>,
}

impl<A: TodoApi> TodoController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RefCell::new(AppState::new()),
            listeners: RefCell::new(Vec::new()),
            next_seq: Cell::new(1),
        }
    }

    /// Register a callback invoked after every state change
    pub fn subscribe(&self, listener: impl Fn(&AppState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        self.notify();
        result
    }

    fn notify(&self) {
        let state = self.state.borrow();
        for listener in self.listeners.borrow().iter() {
            listener(&state);
        }
    }

    fn next_seq(&self) -> u64 {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        seq
    }

    // ========================
    // Banners
    // ========================

    /// Show an error banner; returns its sequence number for dismissal
    pub fn show_error(&self, message: impl Into<String>) -> u64 {
        let seq = self.next_seq();
        let message = message.into();
        log::warn!("[CTRL] {}", message);
        self.update(|s| s.banner = Some(Banner { seq, message }));
        seq
    }

    /// Show a success toast; returns its sequence number for dismissal
    pub fn show_notice(&self, message: impl Into<String>) -> u64 {
        let seq = self.next_seq();
        let message = message.into();
        self.update(|s| s.notice = Some(Banner { seq, message }));
        seq
    }

    /// Hide the error banner if it is still the one numbered `seq`
    pub fn dismiss_banner(&self, seq: u64) {
        if self.with_state(|s| s.banner.as_ref().map(|b| b.seq)) == Some(seq) {
            self.update(|s| s.banner = None);
        }
    }

    /// Hide the success toast if it is still the one numbered `seq`
    pub fn dismiss_notice(&self, seq: u64) {
        if self.with_state(|s| s.notice.as_ref().map(|n| n.seq)) == Some(seq) {
            self.update(|s| s.notice = None);
        }
    }

    fn fail(&self, action: &str, error: ClientError) -> ClientError {
        self.show_error(format!("{}: {}", action, error));
        error
    }

    /// Run one request with the loading flag raised and any old banner cleared
    async fn request<T>(&self, action: &str, call: impl Future<Output = ClientResult<T>>) -> ClientResult<T> {
        self.update(|s| {
            s.loading = true;
            s.banner = None;
        });
        let result = call.await;
        self.update(|s| s.loading = false);
        result.map_err(|e| self.fail(action, e))
    }

    // ========================
    // Operations
    // ========================

    /// Fetch the full list and replace the local collection
    pub async fn load(&self) -> ClientResult<()> {
        let todos = self.request("Failed to load todos", self.api.list_todos()).await?;
        log::info!("[CTRL] Loaded {} todos", todos.len());
        self.update(|s| s.todos.replace_all(todos));
        Ok(())
    }

    /// Create a pending todo. A blank title never reaches the network.
    pub async fn create(&self, title: &str, description: &str) -> ClientResult<Todo> {
        let request = match TodoRequest::from_input(title, description, false) {
            Ok(request) => request,
            Err(e) => {
                self.update(|s| s.form_error = Some(e.to_string()));
                return Err(e);
            }
        };

        let todo = self.request("Failed to create todo", self.api.create_todo(&request)).await?;
        log::info!("[CTRL] Created todo {}", todo.id);
        self.update(|s| {
            s.todos.apply_created(todo.clone());
            s.form_error = None;
        });
        self.show_notice("Todo created");
        Ok(todo)
    }

    /// Flip the completion flag of a cached todo
    pub async fn toggle(&self, id: TodoId) -> ClientResult<Todo> {
        let request = match self.with_state(|s| s.todos.get(id).map(Todo::toggle_request)) {
            Some(request) => request,
            None => return Err(self.fail("Failed to update todo", ClientError::NotFound(id))),
        };

        let todo = self.request("Failed to update todo", self.api.update_todo(id, &request)).await?;
        self.reconcile_update(todo)
    }

    /// Re-read a single todo from the server
    pub async fn refresh(&self, id: TodoId) -> ClientResult<Todo> {
        let todo = self.request("Failed to refresh todo", self.api.get_todo(id)).await?;
        self.reconcile_update(todo)
    }

    fn reconcile_update(&self, todo: Todo) -> ClientResult<Todo> {
        match self.update(|s| s.todos.apply_updated(todo.clone())) {
            Ok(()) => Ok(todo),
            Err(e) => Err(self.fail("Failed to update todo", e)),
        }
    }

    /// Delete a todo; an edit session on it ends with it
    pub async fn delete(&self, id: TodoId) -> ClientResult<()> {
        self.request("Failed to delete todo", self.api.delete_todo(id)).await?;
        log::info!("[CTRL] Deleted todo {}", id);
        self.update(|s| {
            s.todos.apply_deleted(id);
            if s.edit.is_editing(id) {
                s.edit.end();
                s.edit_error = None;
            }
        });
        self.show_notice("Todo deleted");
        Ok(())
    }

    // ========================
    // Edit session
    // ========================

    /// Stage a cached todo for editing, replacing any open session
    pub fn begin_edit(&self, id: TodoId) -> ClientResult<()> {
        if !self.with_state(|s| s.todos.contains(id)) {
            return Err(self.fail("Cannot edit todo", ClientError::NotFound(id)));
        }
        self.update(|s| {
            s.edit.begin(id);
            s.edit_error = None;
        });
        Ok(())
    }

    /// Close the edit session without saving (cancel button or backdrop click)
    pub fn cancel_edit(&self) {
        self.update(|s| {
            s.edit.end();
            s.edit_error = None;
        });
    }

    /// Save the staged todo. The session stays open if the save fails.
    pub async fn save_edit(&self, title: &str, description: &str, completed: bool) -> ClientResult<Todo> {
        let Some(id) = self.with_state(|s| s.edit.editing()) else {
            return Err(ClientError::Validation("No todo is being edited".to_string()));
        };
        let request = match TodoRequest::from_input(title, description, completed) {
            Ok(request) => request,
            Err(e) => {
                self.update(|s| s.edit_error = Some(e.to_string()));
                return Err(e);
            }
        };

        let todo = self.request("Failed to update todo", self.api.update_todo(id, &request)).await?;
        let reconciled = self.update(|s| {
            // Another edit may have been opened while this save was in flight
            if s.edit.is_editing(id) {
                s.edit.end();
                s.edit_error = None;
            }
            s.todos.apply_updated(todo.clone())
        });
        match reconciled {
            Ok(()) => {
                self.show_notice("Todo updated");
                Ok(todo)
            }
            Err(e) => Err(self.fail("Failed to update todo", e)),
        }
    }

    // ========================
    // View state
    // ========================

    pub fn set_filter(&self, filter: Filter) {
        self.update(|s| s.filter = filter);
    }

    /// Probe the backend's health endpoint; failures only mark it offline
    pub async fn check_health(&self) -> ServerStatus {
        let status = match self.api.health().await {
            Ok(health) if health.is_ok() => ServerStatus::Online,
            Ok(health) => {
                log::warn!("[CTRL] Health check reported {:?}", health.status);
                ServerStatus::Offline
            }
            Err(e) => {
                log::warn!("[CTRL] Health check failed: {}", e);
                ServerStatus::Offline
            }
        };
        self.update(|s| s.server = status);
        status
    }
}
