//! Edit Modal Component
//!
//! Edit surface for the todo staged in the controller's edit session.
//! A successful save, cancel, × or a click on the backdrop ends the session.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn EditModal() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (completed, set_completed) = signal(false);

    let editing = Memo::new(move |_| ctx.state.with(|s| s.edit.editing()));

    // Stage the record's fields whenever a new session opens
    Effect::new(move |_| {
        if editing.get().is_none() {
            return;
        }
        if let Some(todo) = ctx.state.with_untracked(|s| s.editing_todo().cloned()) {
            set_title.set(todo.title);
            set_description.set(todo.description);
            set_completed.set(todo.completed);
        }
    });

    let close = move || ctx.controller().cancel_edit();

    let save = move |_: MouseEvent| {
        let title = title.get_untracked();
        let description = description.get_untracked();
        let completed = completed.get_untracked();
        ctx.spawn(move |ctrl| async move {
            let _ = ctrl.save_edit(&title, &description, completed).await;
        });
    };

    let edit_error = move || ctx.state.with(|s| s.edit_error.clone());

    view! {
        <Show when=move || editing.get().is_some()>
            <div class="modal" on:click=move |_| close()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Edit Todo"</h2>
                        <button class="close-btn" on:click=move |_| close()>"×"</button>
                    </div>
                    <div class="modal-body">
                        <input
                            type="text"
                            prop:value=title
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                        <textarea
                            prop:value=description
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                prop:checked=completed
                                on:change=move |ev| set_completed.set(event_target_checked(&ev))
                            />
                            "Completed"
                        </label>
                        {move || edit_error().map(|message| view! { <p class="form-error">{message}</p> })}
                    </div>
                    <div class="modal-footer">
                        <button class="btn btn-secondary" on:click=move |_| close()>"Cancel"</button>
                        <button
                            class="btn btn-primary"
                            disabled=move || ctx.state.with(|s| s.loading)
                            on:click=save
                        >
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
