//! List Helpers
//!
//! In-place edits of the screen's task list, addressed by task id.

use crate::model::{Task, TaskId};

/// Append a task at the end of the list
pub fn append_task(list: &mut Vec<Task>, task: Task) {
    list.push(task);
}

/// Replace the task with the same id, keeping its position.
///
/// Returns `false` when the task has no id or nothing matches.
pub fn replace_task(list: &mut [Task], task: Task) -> bool {
    let Some(id) = task.id.as_ref() else {
        return false;
    };
    match list.iter_mut().find(|t| t.id.as_ref() == Some(id)) {
        Some(slot) => {
            *slot = task;
            true
        }
        None => false,
    }
}

/// Remove the task with this id, if present
pub fn remove_task(list: &mut Vec<Task>, id: &TaskId) -> Option<Task> {
    let index = list.iter().position(|t| t.id.as_ref() == Some(id))?;
    Some(list.remove(index))
}

/// Remove the first id-less entry equal to `task`.
///
/// A create whose response carried no id leaves such an entry behind.
pub fn remove_unsaved(list: &mut Vec<Task>, task: &Task) -> Option<Task> {
    if task.is_persisted() {
        return None;
    }
    let index = list.iter().position(|t| t == task)?;
    Some(list.remove(index))
}
