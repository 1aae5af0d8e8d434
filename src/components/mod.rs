//! UI Components
//!
//! Leptos components for the task list.

mod new_task_form;
mod task_item;
mod task_list;

pub use new_task_form::NewTaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
