//! Task List App
//!
//! The single screen: header, task list and the add / edit modal.
//! Edits and deletes are applied locally first and then sent to the
//! service; a failed request is reported but not rolled back.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tasks_client::{Task, TasksClient};

use crate::components::{ErrorBanner, ScreenHeader, TaskFormModal, TaskList};
use crate::context::{AppContext, SyncError};
use crate::form::{Submission, TaskForm};
use crate::store::{
    store_add_task, store_remove_task, store_set_loading, store_set_tasks, store_update_task,
    TaskState, TaskStateStoreFields, TaskStore,
};

#[component]
pub fn App(client: TasksClient) -> impl IntoView {
    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (sync_error, set_sync_error) = signal::<Option<SyncError>>(None);
    let form = RwSignal::new(TaskForm::default());
    let store: TaskStore = Store::new(TaskState::default());

    let ctx = AppContext::new(
        client,
        (reload_trigger, set_reload_trigger),
        form,
        (sync_error, set_sync_error),
    );

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Load tasks on mount and whenever a reload is triggered
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::info!("[APP] Loading tasks, trigger={}", trigger);
        load_tasks(ctx, store);
    });

    // Coming back to the screen refreshes it
    let focus_handle = window_event_listener(ev::focus, move |_| ctx.reload());
    on_cleanup(move || focus_handle.remove());

    let open_create = Callback::new(move |_: ()| form.update(TaskForm::open_create));
    let open_edit = Callback::new(move |task: Task| form.update(|f| f.open_edit(task)));
    let delete = Callback::new(move |task: Task| delete_task(ctx, store, task));

    let submit = Callback::new(move |_: ()| match form.try_update(TaskForm::submit) {
        Some(Ok(Submission::Create(draft))) => create_task(ctx, store, draft),
        Some(Ok(Submission::Update(task))) => update_task(ctx, store, task),
        Some(Err(e)) => log::debug!("[APP] Form rejected: {}", e),
        None => {}
    });

    view! {
        <div class="mobile-app-container">
            <ScreenHeader
                title="To-Do"
                task_count=Signal::derive(move || store.tasks().with(Vec::len))
                on_add=open_create
            />

            <ErrorBanner />

            <main class="screen-content">
                <TaskList on_edit=open_edit on_delete=delete />
            </main>

            <TaskFormModal on_submit=submit />
        </div>
    }
}

// ========================
// Handlers
// ========================

fn load_tasks(ctx: AppContext, store: TaskStore) {
    let client = ctx.client();
    store_set_loading(&store, true);
    spawn_local(async move {
        match client.list_tasks().await {
            Ok(tasks) => {
                log::info!("[APP] Loaded {} tasks", tasks.len());
                store_set_tasks(&store, tasks);
            }
            Err(e) => ctx.report_error(format!("Could not load tasks: {}", e)),
        }
        store_set_loading(&store, false);
    });
}

/// The list only gains the task once the service accepted it
fn create_task(ctx: AppContext, store: TaskStore, draft: Task) {
    let client = ctx.client();
    log::info!("[APP] Creating task '{}'", draft.title);
    spawn_local(async move {
        match client.create_task(&draft).await {
            Ok(created) => store_add_task(&store, created),
            Err(e) => ctx.report_error(format!("Could not add task: {}", e)),
        }
    });
}

fn update_task(ctx: AppContext, store: TaskStore, task: Task) {
    if !store_update_task(&store, task.clone()) {
        log::warn!("[APP] Edited task {:?} is no longer in the list", task.id);
    }

    let client = ctx.client();
    spawn_local(async move {
        if let Err(e) = client.update_task(&task).await {
            ctx.report_error(format!("Could not save task: {}", e));
        }
    });
}

fn delete_task(ctx: AppContext, store: TaskStore, task: Task) {
    store_remove_task(&store, &task);

    // Never reached the service, nothing to delete there
    let Some(id) = task.id else {
        log::debug!("[APP] Removed unsaved task '{}'", task.title);
        return;
    };

    let client = ctx.client();
    spawn_local(async move {
        if let Err(e) = client.delete_task(&id).await {
            ctx.report_error(format!("Could not delete task: {}", e));
        }
    });
}
