//! Task Form Modal
//!
//! Title + description inputs bound to the shared form state. Serves both
//! the add and the edit flow; heading and button label follow the mode.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::form::TaskForm;

#[component]
pub fn TaskFormModal(#[prop(into)] on_submit: Callback<()>) -> impl IntoView {
    let form = use_app_context().form;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <Modal
            visible=Signal::derive(move || form.with(TaskForm::is_open))
            title=Signal::derive(move || form.with(|f| f.heading().to_string()))
            on_close=Callback::new(move |_: ()| form.update(TaskForm::close))
        >
            <form class="task-form" on:submit=submit>
                <input
                    type="text"
                    class="task-input"
                    placeholder="Title"
                    prop:value=move || form.with(|f| f.draft().title.clone())
                    on:input=move |ev| form.update(|f| f.set_title(event_target_value(&ev)))
                />
                <textarea
                    class="task-input task-description-input"
                    placeholder="Description"
                    rows="4"
                    prop:value=move || form.with(|f| f.draft().description.clone())
                    on:input=move |ev| form.update(|f| f.set_description(event_target_value(&ev)))
                ></textarea>
                {move || form.with(|f| f.error().map(|e| e.to_string())).map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
                <div class="task-form-actions">
                    <button type="submit" class="submit-btn">
                        {move || form.with(TaskForm::submit_label)}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
