//! New Todo Form Component
//!
//! Title + description form for creating todos.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_todo = move |ev: SubmitEvent| {
        ev.prevent_default();
        let title = title.get_untracked();
        let description = description.get_untracked();

        ctx.spawn(move |ctrl| async move {
            if ctrl.create(&title, &description).await.is_ok() {
                set_title.set(String::new());
                set_description.set(String::new());
            }
        });
    };

    let form_error = move || ctx.state.with(|s| s.form_error.clone());

    view! {
        <form class="todo-form" on:submit=create_todo>
            <input
                type="text"
                class="todo-title-input"
                placeholder="What needs to be done?"
                prop:value=title
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                class="todo-description-input"
                placeholder="Description (optional)"
                prop:value=description
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            {move || form_error().map(|message| view! { <p class="form-error">{message}</p> })}
            <button type="submit" class="btn btn-primary" disabled=move || ctx.state.with(|s| s.loading)>
                "Add Todo"
            </button>
        </form>
    }
}
