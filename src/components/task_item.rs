//! Task Item Component
//!
//! A single row: title, optional description, edit and delete actions.

use leptos::prelude::*;
use tasks_client::Task;

use crate::components::DeleteTaskButton;

#[component]
pub fn TaskItem(
    task: Task,
    on_edit: Callback<Task>,
    on_delete: Callback<Task>,
) -> impl IntoView {
    let saved = task.is_persisted();
    let title = task.title.clone();
    let description = task.description.clone();
    let has_description = !description.trim().is_empty();
    let edit_task = task.clone();

    view! {
        <div class=if saved { "task-item" } else { "task-item unsaved" }>
            <div class="task-text">
                <span class="task-title">{title}</span>
                {has_description.then(|| view! {
                    <span class="task-description">{description}</span>
                })}
            </div>
            <div class="task-actions">
                // Unsaved rows have no id to PATCH against
                <button
                    class="edit-btn"
                    title="Edit"
                    disabled=!saved
                    on:click=move |_| on_edit.run(edit_task.clone())
                >
                    "✎"
                </button>
                <DeleteTaskButton task=task on_delete=on_delete />
            </div>
        </div>
    }
}
