//! Modal Component
//!
//! Centered card over a dimmed backdrop. Clicking the backdrop or the ×
//! closes it; clicks inside the card do not.

use leptos::prelude::*;

#[component]
pub fn Modal(
    visible: Signal<bool>,
    title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal-card" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <span class="modal-title">{move || title.get()}</span>
                        <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
