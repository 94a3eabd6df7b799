//! Todo Item Component
//!
//! A single todo card with toggle, edit and delete actions.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::format::format_timestamp;
use crate::models::Todo;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let completed = todo.completed;
    let description = todo.description().map(str::to_string);

    let toggle = move |_: MouseEvent| {
        ctx.spawn(move |ctrl| async move {
            let _ = ctrl.toggle(id).await;
        });
    };

    let delete = move |_: ()| {
        ctx.spawn(move |ctrl| async move {
            let _ = ctrl.delete(id).await;
        });
    };

    view! {
        <div class=if completed { "todo-item completed" } else { "todo-item" } data-id=id.to_string()>
            <div class="todo-header">
                <div class="todo-title">{todo.title}</div>
                {description.map(|d| view! { <div class="todo-description">{d}</div> })}
            </div>
            <div class="todo-meta">
                <span>"Created " {format_timestamp(&todo.created_at)}</span>
                <span>"Updated " {format_timestamp(&todo.updated_at)}</span>
            </div>
            <div class="todo-actions">
                <button
                    class=if completed { "btn btn-secondary" } else { "btn btn-success" }
                    on:click=toggle
                >
                    {if completed { "Undo" } else { "Complete" }}
                </button>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        let _ = ctx.controller().begin_edit(id);
                    }
                >
                    "Edit"
                </button>
                <DeleteConfirmButton button_class="btn btn-danger" on_confirm=delete />
            </div>
        </div>
    }
}
