//! Tasks Client
//!
//! Task model, REST bindings and list helpers shared by the screen.
//! Nothing in here touches the DOM, so it builds and tests on any target.

mod client;
mod config;
mod error;
mod list;
mod model;

pub use client::TasksClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use list::{append_task, remove_task, remove_unsaved, replace_task};
pub use model::{Task, TaskId};
