//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use tasks_client::TasksClient;

use crate::form::TaskForm;

/// A reported failure; `seq` distinguishes repeats of the same message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncError {
    pub seq: u32,
    pub message: String,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// REST client for the tasks service
    client: StoredValue<TasksClient>,
    /// Trigger to reload tasks from the service - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from the service - write
    set_reload_trigger: WriteSignal<u32>,
    /// Add / edit modal state
    pub form: RwSignal<TaskForm>,
    /// Last failed request, shown in the error banner - read
    pub sync_error: ReadSignal<Option<SyncError>>,
    /// Last failed request - write
    set_sync_error: WriteSignal<Option<SyncError>>,
    /// Sequence number of the last reported failure
    error_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        client: TasksClient,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        form: RwSignal<TaskForm>,
        sync_error: (ReadSignal<Option<SyncError>>, WriteSignal<Option<SyncError>>),
    ) -> Self {
        Self {
            client: StoredValue::new(client),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            form,
            sync_error: sync_error.0,
            set_sync_error: sync_error.1,
            error_seq: StoredValue::new(0),
        }
    }

    /// Handle for issuing requests from a spawned task
    pub fn client(&self) -> TasksClient {
        self.client.get_value()
    }

    /// Trigger a reload of tasks
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Log a failed request and show it to the user
    pub fn report_error(&self, message: String) {
        log::error!("{}", message);
        self.error_seq.update_value(|seq| *seq = seq.wrapping_add(1));
        let seq = self.error_seq.get_value();
        self.set_sync_error.set(Some(SyncError { seq, message }));
    }

    pub fn clear_error(&self) {
        self.set_sync_error.set(None);
    }

    /// Clear the banner only if it still shows failure `seq`
    pub fn clear_error_if(&self, seq: u32) {
        let current = self.sync_error.with_untracked(|e| e.as_ref().map(|e| e.seq));
        if current == Some(seq) {
            self.clear_error();
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
