//! Filter Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::todo_list::Filter;

/// All / Pending / Completed selector
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="filter-bar">
            {Filter::ALL.into_iter().map(|filter| {
                let is_active = move || ctx.state.with(|s| s.filter == filter);
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-filter=filter.as_str()
                        on:click=move |_| ctx.controller().set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
