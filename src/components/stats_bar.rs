//! Stats Bar Component
//!
//! Aggregate counts plus backend reachability.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::ServerStatus;

#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_app_context();

    let stats = Memo::new(move |_| ctx.state.with(|s| s.stats()));
    let server = Memo::new(move |_| ctx.state.with(|s| s.server));

    let server_label = move || match server.get() {
        ServerStatus::Unknown => ("server-status unknown", "Checking server..."),
        ServerStatus::Online => ("server-status online", "Server online"),
        ServerStatus::Offline => ("server-status offline", "Server unreachable"),
    };

    view! {
        <div class="stats-bar">
            <span class="stat">"Total: " {move || stats.get().total}</span>
            <span class="stat">"Pending: " {move || stats.get().pending}</span>
            <span class="stat">"Completed: " {move || stats.get().completed}</span>
            <span class=move || server_label().0>{move || server_label().1}</span>
        </div>
    }
}
