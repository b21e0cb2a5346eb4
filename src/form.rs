//! Task Form State
//!
//! Drives the add / edit modal. One draft is shared by both modes; closing
//! the modal always discards it.

use tasks_client::Task;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Closed,
    Creating,
    Editing,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Invalid task description")]
    EmptyTask,
    #[error("This task has not been saved yet")]
    MissingId,
    #[error("No task form is open")]
    NotOpen,
}

/// What the screen should send after a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(Task),
    Update(Task),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    mode: FormMode,
    draft: Task,
    error: Option<FormError>,
}

impl TaskForm {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn draft(&self) -> &Task {
        &self.draft
    }

    /// Last validation failure, cleared on the next edit
    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Creating => "Describe the task",
            FormMode::Editing => "Edit the task",
            FormMode::Closed => "",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Editing => "Save",
            _ => "Add",
        }
    }

    pub fn open_create(&mut self) {
        *self = Self {
            mode: FormMode::Creating,
            ..Self::default()
        };
    }

    pub fn open_edit(&mut self, task: Task) {
        *self = Self {
            mode: FormMode::Editing,
            draft: task,
            error: None,
        };
    }

    pub fn set_title(&mut self, title: String) {
        if self.is_open() {
            self.draft.title = title;
            self.error = None;
        }
    }

    pub fn set_description(&mut self, description: String) {
        if self.is_open() {
            self.draft.description = description;
            self.error = None;
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Validate the draft and hand it over; the form closes on success
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        match self.validate() {
            Ok(submission) => {
                self.close();
                Ok(submission)
            }
            Err(FormError::NotOpen) => Err(FormError::NotOpen),
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn validate(&self) -> Result<Submission, FormError> {
        if !self.is_open() {
            return Err(FormError::NotOpen);
        }
        if self.draft.is_blank() {
            return Err(FormError::EmptyTask);
        }
        match self.mode {
            FormMode::Creating => Ok(Submission::Create(self.draft.clone())),
            FormMode::Editing if self.draft.is_persisted() => Ok(Submission::Update(self.draft.clone())),
            FormMode::Editing => Err(FormError::MissingId),
            FormMode::Closed => Err(FormError::NotOpen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(id: u64, title: &str, description: &str) -> Task {
        Task::draft(title, description).with_id(id)
    }

    #[test]
    fn test_create_flow() {
        let mut form = TaskForm::default();
        assert!(!form.is_open());

        form.open_create();
        assert_eq!(form.mode(), FormMode::Creating);
        assert_eq!(form.heading(), "Describe the task");
        assert_eq!(form.submit_label(), "Add");
        assert_eq!(form.draft(), &Task::default());

        form.set_title("Pay rent".to_string());
        form.set_description("before the 5th".to_string());

        let submission = form.submit().unwrap();
        assert_eq!(submission, Submission::Create(Task::draft("Pay rent", "before the 5th")));

        // Closed and reset for the next open
        assert_eq!(form, TaskForm::default());
    }

    #[test]
    fn test_edit_flow() {
        let mut form = TaskForm::default();
        form.open_edit(saved(4, "Pay rent", ""));
        assert_eq!(form.heading(), "Edit the task");
        assert_eq!(form.submit_label(), "Save");
        assert_eq!(form.draft().title, "Pay rent");

        form.set_description("transfer done".to_string());
        let submission = form.submit().unwrap();

        assert_eq!(submission, Submission::Update(saved(4, "Pay rent", "transfer done")));
        assert!(!form.is_open());
    }

    #[test]
    fn test_blank_draft_is_rejected_and_form_stays_open() {
        let mut form = TaskForm::default();
        form.open_create();
        form.set_title("   ".to_string());

        assert_eq!(form.submit(), Err(FormError::EmptyTask));
        assert!(form.is_open());
        assert_eq!(form.error(), Some(&FormError::EmptyTask));
        assert_eq!(form.error().unwrap().to_string(), "Invalid task description");

        // Typing clears the message
        form.set_title("Something".to_string());
        assert!(form.error().is_none());
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_description_alone_is_enough() {
        let mut form = TaskForm::default();
        form.open_create();
        form.set_description("no title, just notes".to_string());
        assert!(matches!(form.submit(), Ok(Submission::Create(_))));
    }

    #[test]
    fn test_editing_unsaved_task_needs_id() {
        let mut form = TaskForm::default();
        form.open_edit(Task::draft("local only", ""));

        assert_eq!(form.submit(), Err(FormError::MissingId));
        assert!(form.is_open());
    }

    #[test]
    fn test_close_discards_draft() {
        let mut form = TaskForm::default();
        form.open_edit(saved(1, "Keep", "me"));
        form.set_title("Changed my mind".to_string());
        form.close();

        assert_eq!(form, TaskForm::default());

        // A new create starts empty even after an edit was abandoned
        form.open_create();
        assert_eq!(form.draft(), &Task::default());
    }

    #[test]
    fn test_closed_form_ignores_input() {
        let mut form = TaskForm::default();
        form.set_title("typed into nothing".to_string());
        assert_eq!(form.draft().title, "");
        assert_eq!(form.submit(), Err(FormError::NotOpen));
        assert!(form.error().is_none());
    }
}
