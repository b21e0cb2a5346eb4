//! Task List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use tasks_client::{append_task, remove_task, remove_unsaved, replace_task, Task};

/// Screen state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskState {
    /// Tasks in display order
    pub tasks: Vec<Task>,
    /// A list request is in flight
    pub loading: bool,
}

/// Type alias for the store
pub type TaskStore = Store<TaskState>;

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list with a fresh load
pub fn store_set_tasks(store: &TaskStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

pub fn store_set_loading(store: &TaskStore, loading: bool) {
    *store.loading().write() = loading;
}

/// Add a task at the end of the list
pub fn store_add_task(store: &TaskStore, task: Task) {
    append_task(&mut *store.tasks().write(), task);
}

/// Update a task in the store by ID
pub fn store_update_task(store: &TaskStore, updated: Task) -> bool {
    replace_task(&mut *store.tasks().write(), updated)
}

/// Remove a task from the store, by ID when it has one
pub fn store_remove_task(store: &TaskStore, task: &Task) -> Option<Task> {
    let tasks = store.tasks();
    let mut tasks = tasks.write();
    match task.id.as_ref() {
        Some(id) => remove_task(&mut *tasks, id),
        None => remove_unsaved(&mut *tasks, task),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run `f` against a fresh store inside a reactive owner
    fn with_store<T>(tasks: Vec<Task>, f: impl FnOnce(TaskStore) -> T) -> T {
        let owner = Owner::new();
        owner.with(|| {
            let store: TaskStore = Store::new(TaskState {
                tasks,
                loading: false,
            });
            f(store)
        })
    }

    fn titles(store: &TaskStore) -> Vec<String> {
        store
            .tasks()
            .get_untracked()
            .into_iter()
            .map(|t| t.title)
            .collect()
    }

    fn saved_list() -> Vec<Task> {
        vec![
            Task::draft("Laundry", "").with_id(1u64),
            Task::draft("Bills", "").with_id(2u64),
        ]
    }

    #[test]
    fn test_set_and_add() {
        with_store(Vec::new(), |store| {
            store_set_tasks(&store, saved_list());
            store_add_task(&store, Task::draft("Groceries", "eggs"));
            assert_eq!(titles(&store), ["Laundry", "Bills", "Groceries"]);

            store_set_loading(&store, true);
            assert!(store.loading().get_untracked());
        });
    }

    #[test]
    fn test_update_hit_and_miss() {
        with_store(saved_list(), |store| {
            assert!(store_update_task(&store, Task::draft("Bills, paid", "").with_id(2u64)));
            assert_eq!(titles(&store), ["Laundry", "Bills, paid"]);

            assert!(!store_update_task(&store, Task::draft("Ghost", "").with_id(9u64)));
            assert_eq!(titles(&store), ["Laundry", "Bills, paid"]);
        });
    }

    #[test]
    fn test_remove_by_id() {
        with_store(saved_list(), |store| {
            // Stale title does not matter, the id does
            let removed = store_remove_task(&store, &Task::draft("old title", "").with_id(1u64));
            assert_eq!(removed.map(|t| t.title), Some("Laundry".to_string()));
            assert_eq!(titles(&store), ["Bills"]);

            assert!(store_remove_task(&store, &Task::draft("", "").with_id(1u64)).is_none());
            assert_eq!(titles(&store), ["Bills"]);
        });
    }

    #[test]
    fn test_remove_unsaved_row() {
        let draft = Task::draft("Water plants", "");
        let mut tasks = saved_list();
        tasks.push(draft.clone());
        tasks.push(draft.clone());

        with_store(tasks, |store| {
            assert_eq!(store_remove_task(&store, &draft), Some(draft.clone()));
            assert_eq!(titles(&store), ["Laundry", "Bills", "Water plants"]);
        });
    }
}
