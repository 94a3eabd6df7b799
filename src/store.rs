//! Application State
//!
//! Everything the UI renders, owned by the controller and handed to the
//! view as snapshots.

use crate::edit_session::EditSession;
use crate::models::Todo;
use crate::todo_list::{Filter, TodoList, TodoStats};

/// Whether the backend answered its health check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

/// A transient message. `seq` identifies it for its dismiss timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub seq: u64,
    pub message: String,
}

/// Global application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Local mirror of the server's todos
    pub todos: TodoList,
    /// Active list filter
    pub filter: Filter,
    /// Todo staged in the edit modal
    pub edit: EditSession,
    /// A request is in flight
    pub loading: bool,
    /// Error banner (remote failures)
    pub banner: Option<Banner>,
    /// Success toast
    pub notice: Option<Banner>,
    /// Inline error of the create form
    pub form_error: Option<String>,
    /// Inline error of the edit modal
    pub edit_error: Option<String>,
    pub server: ServerStatus,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Todos visible under the current filter
    pub fn visible(&self) -> Vec<Todo> {
        self.todos.filtered(self.filter)
    }

    pub fn stats(&self) -> TodoStats {
        self.todos.stats()
    }

    /// The record currently staged for editing
    pub fn editing_todo(&self) -> Option<&Todo> {
        self.edit.editing().and_then(|id| self.todos.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoId;
    use crate::todo_list::tests::todo;

    #[test]
    fn test_visible_follows_filter() {
        let mut state = AppState::new();
        state.todos.replace_all(vec![todo(1, "a", false), todo(2, "b", true)]);

        state.filter = Filter::Completed;
        assert_eq!(state.visible().len(), 1);
        assert_eq!(state.visible()[0].id, TodoId(2));

        state.filter = Filter::All;
        assert_eq!(state.visible().len(), 2);
    }

    #[test]
    fn test_editing_todo_resolves_staged_id() {
        let mut state = AppState::new();
        state.todos.replace_all(vec![todo(1, "a", false)]);
        assert!(state.editing_todo().is_none());

        state.edit.begin(TodoId(1));
        assert_eq!(state.editing_todo().map(|t| t.title.as_str()), Some("a"));
    }
}
