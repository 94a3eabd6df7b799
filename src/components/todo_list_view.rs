//! Todo List View Component
//!
//! Renders the todos visible under the active filter.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::use_app_context;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();

    let visible = move || ctx.state.with(|s| s.visible());
    let has_visible = move || ctx.state.with(|s| s.todos.iter().any(|t| s.filter.matches(t)));

    view! {
        <Show
            when=has_visible
            fallback=|| view! {
                <div class="empty-state">
                    <p>"Nothing here yet."</p>
                </div>
            }
        >
            <div class="todo-list">
                <For
                    each=visible
                    // Every field the card renders, so any server change re-renders it
                    key=|todo| (
                        todo.id,
                        todo.title.clone(),
                        todo.description.clone(),
                        todo.completed,
                        todo.updated_at,
                    )
                    children=move |todo| view! { <TodoItem todo=todo /> }
                />
            </div>
        </Show>
    }
}
