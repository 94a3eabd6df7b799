//! Todo Client App
//!
//! Root component: builds the controller, provides context, loads the list
//! and runs the banner dismiss timers.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::api::HttpTodoApi;
use crate::components::{EditModal, FilterBar, NewTodoForm, StatsBar, StatusBanners, TodoListView};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::controller::TodoController;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    log::info!("[APP] Using API at {}", config.api_base_url);
    let controller = Rc::new(TodoController::new(HttpTodoApi::new(config.clone())));
    let ctx = AppContext::new(controller, config);
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| {
        ctx.spawn(|ctrl| async move {
            let _ = ctrl.load().await;
            ctrl.check_health().await;
        });
    });

    // Auto-dismiss: one timer per banner, keyed by its sequence number
    let banner_seq = Memo::new(move |_| ctx.state.with(|s| s.banner.as_ref().map(|b| b.seq)));
    Effect::new(move |_| {
        if let Some(seq) = banner_seq.get() {
            let delay = ctx.config.with_value(|c| c.error_dismiss_ms);
            ctx.spawn(move |ctrl| async move {
                TimeoutFuture::new(delay).await;
                ctrl.dismiss_banner(seq);
            });
        }
    });

    let notice_seq = Memo::new(move |_| ctx.state.with(|s| s.notice.as_ref().map(|n| n.seq)));
    Effect::new(move |_| {
        if let Some(seq) = notice_seq.get() {
            let delay = ctx.config.with_value(|c| c.notice_dismiss_ms);
            ctx.spawn(move |ctrl| async move {
                TimeoutFuture::new(delay).await;
                ctrl.dismiss_notice(seq);
            });
        }
    });

    view! {
        <div class="container">
            <header class="app-header">
                <h1>"Todo List"</h1>
                <StatsBar />
            </header>

            <StatusBanners />

            <NewTodoForm />

            <FilterBar />

            <TodoListView />

            <EditModal />
        </div>
    }
}
