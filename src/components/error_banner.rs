//! Error Banner Component
//!
//! Shows the last failed request; hides itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

const DISMISS_AFTER_MS: u32 = 5_000;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        if let Some(seq) = ctx.sync_error.with(|e| e.as_ref().map(|e| e.seq)) {
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                ctx.clear_error_if(seq);
            });
        }
    });

    view! {
        {move || ctx.sync_error.get().map(|error| view! {
            <div class="error-banner" role="alert">
                <span class="error-text">{error.message}</span>
                <button class="close-btn" on:click=move |_| ctx.clear_error()>"×"</button>
            </div>
        })}
    }
}
