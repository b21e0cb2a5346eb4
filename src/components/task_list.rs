//! Task List Component
//!
//! Renders every task in the store, or a placeholder when there are none.

use leptos::prelude::*;
use tasks_client::{Task, TaskId};

use crate::components::TaskItem;
use crate::store::{use_task_store, TaskStateStoreFields};

#[component]
pub fn TaskList(on_edit: Callback<Task>, on_delete: Callback<Task>) -> impl IntoView {
    let store = use_task_store();
    let is_empty = move || store.tasks().with(Vec::is_empty);

    view! {
        <div class="task-list">
            <Show when=move || is_empty() && store.loading().get()>
                <p class="task-list-empty">"Loading…"</p>
            </Show>
            <Show when=move || is_empty() && !store.loading().get()>
                <p class="task-list-empty">"Nothing to do. Tap + to add a task."</p>
            </Show>

            <For
                each=move || store.tasks().get().into_iter().enumerate()
                key=|(index, task)| row_key(*index, task)
                children=move |(_, task)| view! {
                    <TaskItem task=task on_edit=on_edit on_delete=on_delete />
                }
            />

            <div class="task-list-footer"></div>
        </div>
    }
}

/// Identity of a rendered row.
///
/// Keys must be unique within one render, and a create whose response had
/// no id can leave identical unsaved rows behind, so those are told apart
/// by position. Content is part of the key so edits re-render the row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum RowKey {
    Saved(TaskId, String, String),
    Unsaved(usize, String, String),
}

fn row_key(index: usize, task: &Task) -> RowKey {
    let title = task.title.clone();
    let description = task.description.clone();
    match task.id.clone() {
        Some(id) => RowKey::Saved(id, title, description),
        None => RowKey::Unsaved(index, title, description),
    }
}
