//! Todo Collection
//!
//! Local mirror of the server's todo list and the reconciliation rules that
//! keep it in step with server responses. Counts and filtered views are
//! always derived from the collection, never cached.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};
use crate::models::{Todo, TodoId};

/// Which subset of the list is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    /// Filter buttons, in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Pending => "pending",
            Filter::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "pending" => Filter::Pending,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

/// Aggregate counts; `total == completed + pending` by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Ordered todo collection, at most one record per id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a fresh server listing.
    ///
    /// A repeated id keeps its first position and its last representation.
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos.clear();
        for todo in todos {
            self.upsert(todo);
        }
    }

    /// Reconcile a create response: append, or replace if the id is already here
    pub fn apply_created(&mut self, todo: Todo) {
        self.upsert(todo);
    }

    /// Reconcile an update response by replacing the record wholesale
    pub fn apply_updated(&mut self, todo: Todo) -> ClientResult<()> {
        let id = todo.id;
        let slot = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ClientError::NotFound(id))?;
        *slot = todo;
        Ok(())
    }

    /// Reconcile a delete response. Returns whether a record was removed.
    pub fn apply_deleted(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    fn upsert(&mut self, todo: Todo) {
        match self.todos.iter_mut().find(|t| t.id == todo.id) {
            Some(slot) => *slot = todo,
            None => self.todos.push(todo),
        }
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn ids(&self) -> Vec<TodoId> {
        self.todos.iter().map(|t| t.id).collect()
    }

    /// Records visible under `filter`, in collection order
    pub fn filtered(&self, filter: Filter) -> Vec<Todo> {
        self.todos.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    pub fn stats(&self) -> TodoStats {
        let total = self.todos.len();
        let completed = self.todos.iter().filter(|t| t.completed).count();
        TodoStats {
            total,
            completed,
            pending: total - completed,
        }
    }
}


#[cfg(test)]
mod properties {
    use std::collections::BTreeSet;

    use proptest::prelude::*;
    use proptest::test_runner::Config;

    use super::tests::todo;
    use super::*;

    /// A mutation the user can trigger; `slot` picks an existing server record
    #[derive(Debug, Clone)]
    enum Op {
        Create { completed: bool },
        Update { slot: usize, completed: bool },
        Delete { slot: usize },
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<bool>().prop_map(|completed| Op::Create { completed }),
            (0usize..16, any::<bool>()).prop_map(|(slot, completed)| Op::Update { slot, completed }),
            (0usize..16).prop_map(|slot| Op::Delete { slot }),
        ]
    }

    /// Server-side list answering the way the backend handlers do
    #[derive(Default)]
    struct Server {
        todos: Vec<Todo>,
        next_id: u64,
    }

    impl Server {
        fn ids(&self) -> BTreeSet<TodoId> {
            self.todos.iter().map(|t| t.id).collect()
        }

        fn pick(&self, slot: usize) -> Option<TodoId> {
            if self.todos.is_empty() {
                None
            } else {
                Some(self.todos[slot % self.todos.len()].id)
            }
        }
    }

    /// Run `op` against the server and reconcile its successful response locally
    fn apply(server: &mut Server, list: &mut TodoList, op: &Op) {
        match *op {
            Op::Create { completed } => {
                server.next_id += 1;
                let created = todo(server.next_id, "generated", completed);
                server.todos.push(created.clone());
                list.apply_created(created);
            }
            Op::Update { slot, completed } => {
                if let Some(id) = server.pick(slot) {
                    let record = server.todos.iter_mut().find(|t| t.id == id).unwrap();
                    record.completed = completed;
                    record.title = format!("updated {}", id);
                    list.apply_updated(record.clone()).unwrap();
                }
            }
            Op::Delete { slot } => {
                if let Some(id) = server.pick(slot) {
                    server.todos.retain(|t| t.id != id);
                    assert!(list.apply_deleted(id));
                }
            }
        }
    }

    fn assert_partition(list: &TodoList) {
        let all = list.filtered(Filter::All);
        let completed = list.filtered(Filter::Completed);
        let pending = list.filtered(Filter::Pending);

        let completed_ids: BTreeSet<_> = completed.iter().map(|t| t.id).collect();
        let pending_ids: BTreeSet<_> = pending.iter().map(|t| t.id).collect();
        let all_ids: BTreeSet<_> = all.iter().map(|t| t.id).collect();

        assert!(completed_ids.is_disjoint(&pending_ids));
        assert_eq!(completed_ids.union(&pending_ids).copied().collect::<BTreeSet<_>>(), all_ids);
        assert_eq!(all.len(), list.len());
    }

    proptest! {
        #![proptest_config(Config::with_cases(256))]
        #[test]
        fn reconciled_list_tracks_server(ops in proptest::collection::vec(op(), 0..40)) {
            let mut server = Server::default();
            let mut list = TodoList::new();

            for op in &ops {
                apply(&mut server, &mut list, op);

                prop_assert_eq!(list.ids().into_iter().collect::<BTreeSet<_>>(), server.ids());
                prop_assert_eq!(list.iter().cloned().collect::<Vec<_>>(), server.todos.clone());

                let stats = list.stats();
                prop_assert_eq!(stats.total, stats.completed + stats.pending);
                prop_assert_eq!(stats.total, list.len());
                assert_partition(&list);
            }
        }

        #[test]
        fn replace_all_keeps_ids_unique(ids in proptest::collection::vec(1u64..8, 0..24)) {
            let mut list = TodoList::new();
            list.replace_all(ids.iter().map(|&id| todo(id, "listed", id % 2 == 0)).collect());

            let unique: BTreeSet<_> = ids.iter().copied().map(TodoId).collect();
            prop_assert_eq!(list.len(), unique.len());
            prop_assert_eq!(list.ids().into_iter().collect::<BTreeSet<_>>(), unique);
            assert_partition(&list);
        }
    }
}
