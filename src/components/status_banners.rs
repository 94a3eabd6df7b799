//! Status Banners Component
//!
//! Loading indicator, error banner and success toast.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn StatusBanners() -> impl IntoView {
    let ctx = use_app_context();

    let banner = move || ctx.state.with(|s| s.banner.clone());
    let notice = move || ctx.state.with(|s| s.notice.clone());

    view! {
        <Show when=move || ctx.state.with(|s| s.loading)>
            <div class="loading">"Loading..."</div>
        </Show>
        {move || banner().map(|banner| {
            let seq = banner.seq;
            view! {
                <div class="error-message" role="alert">
                    <span class="error-text">{banner.message}</span>
                    <button class="close-btn" on:click=move |_| ctx.controller().dismiss_banner(seq)>"×"</button>
                </div>
            }
        })}
        {move || notice().map(|notice| view! {
            <div class="notification">{notice.message}</div>
        })}
    }
}
