//! Delete Confirm Button Component
//!
//! Two-step delete for a todo card: nothing is sent to the server until the
//! user confirms.

use leptos::prelude::*;

/// Inline delete confirmation on a todo card
///
/// Shows a "Delete" button initially. Clicking it swaps in "Delete?" with ✓/✗;
/// ✓ fires `on_confirm` (the card's DELETE request) and folds the prompt back.
#[component]
pub fn DeleteConfirmButton(
    /// CSS class of the initial button
    #[prop(into)]
    button_class: String,
    /// Runs the delete once the user confirms
    #[prop(into)]
    on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
