//! Delete Task Button
//!
//! Two-step delete for a task row. The first tap arms it and names the
//! task; the second tap removes it.

use leptos::prelude::*;
use tasks_client::Task;

#[component]
pub fn DeleteTaskButton(task: Task, on_delete: Callback<Task>) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let prompt = delete_prompt(&task);

    let arm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_armed.set(true);
    };
    let disarm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_armed.set(false);
    };
    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_armed.set(false);
        on_delete.run(task.clone());
    };

    view! {
        {move || if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button class="confirm-btn" title="Delete" on:click=confirm.clone()>"✓"</button>
                    <button class="cancel-btn" title="Keep" on:click=disarm>"✗"</button>
                </span>
            }.into_any()
        } else {
            view! {
                <button class="delete-btn" title="Delete task" on:click=arm>"×"</button>
            }.into_any()
        }}
    }
}

/// Confirmation text naming the task, shortened for narrow rows
fn delete_prompt(task: &Task) -> String {
    const MAX_CHARS: usize = 24;

    let title = task.title.trim();
    if title.is_empty() {
        return "Delete?".to_string();
    }
    if title.chars().count() <= MAX_CHARS {
        return format!("Delete \"{}\"?", title);
    }
    let short: String = title.chars().take(MAX_CHARS - 1).collect();
    format!("Delete \"{}…\"?", short.trim_end())
}
