//! Edit Session
//!
//! Tracks which todo, if any, is staged in the edit modal.

use crate::models::TodoId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(TodoId),
}

impl EditSession {
    /// Stage `id` for editing. A session already open is replaced.
    pub fn begin(&mut self, id: TodoId) {
        *self = EditSession::Editing(id);
    }

    /// Close the session (save, cancel or dismissal)
    pub fn end(&mut self) {
        *self = EditSession::Idle;
    }

    pub fn editing(&self) -> Option<TodoId> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing(id) => Some(*id),
        }
    }

    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing() == Some(id)
    }
}
