//! Screen Header Component
//!
//! Title row with the task count and the "+" button that opens the add form.

use leptos::prelude::*;

#[component]
pub fn ScreenHeader(
    #[prop(into)] title: String,
    task_count: Signal<usize>,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="screen-header">
            <div class="screen-title">
                <span class="screen-title-text">{title}</span>
                <span class="task-count">{move || task_count_label(task_count.get())}</span>
            </div>
            <button class="add-task-btn" title="Add task" on:click=move |_| on_add.run(())>
                "+"
            </button>
        </header>
    }
}

fn task_count_label(count: usize) -> String {
    match count {
        0 => "no tasks".to_string(),
        1 => "1 task".to_string(),
        n => format!("{} tasks", n),
    }
}
