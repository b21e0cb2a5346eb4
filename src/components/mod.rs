//! UI Components
//!
//! Reusable Leptos components.

mod delete_task_button;
mod error_banner;
mod modal;
mod screen_header;
mod task_form;
mod task_item;
mod task_list;

pub use delete_task_button::DeleteTaskButton;
pub use error_banner::ErrorBanner;
pub use modal::Modal;
pub use screen_header::ScreenHeader;
pub use task_form::TaskFormModal;
pub use task_item::TaskItem;
pub use task_list::TaskList;
