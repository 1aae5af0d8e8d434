//! Display Surface
//!
//! `render` projects a fetched task list onto rows; a `TaskView` shows them.
//! Rows carry their own actions so the display only has to hand a clicked
//! action back to the client.

use crate::models::{Task, TaskId};

/// Something a rendered row lets the user do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    SetCompleted { id: TaskId, completed: bool },
    Remove { id: TaskId },
}

/// One rendered task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub content: String,
    pub completed: bool,
    /// Requests the opposite of `completed`
    pub toggle: TaskAction,
    pub delete: TaskAction,
}

impl TaskRow {
    pub fn toggle_label(&self) -> &'static str {
        if self.completed {
            "Undo"
        } else {
            "Complete"
        }
    }

    pub fn delete_label(&self) -> &'static str {
        "Delete"
    }

    /// CSS class of the row element
    pub fn row_class(&self) -> &'static str {
        if self.completed {
            "task-row completed"
        } else {
            "task-row"
        }
    }

    /// Inline style of the content span
    pub fn content_style(&self) -> &'static str {
        if self.completed {
            "text-decoration: line-through; color: #888;"
        } else {
            ""
        }
    }
}

/// Counts shown under the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
}

impl TaskSummary {
    pub fn of(rows: &[TaskRow]) -> Self {
        Self {
            total: rows.len(),
            completed: rows.iter().filter(|row| row.completed).count(),
        }
    }
}

impl std::fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} tasks, {} completed", self.total, self.completed)
    }
}

/// Project tasks onto rows, keeping server order
pub fn render(tasks: &[Task]) -> Vec<TaskRow> {
    tasks
        .iter()
        .map(|task| TaskRow {
            id: task.id.clone(),
            content: task.content.clone(),
            completed: task.completed,
            toggle: TaskAction::SetCompleted {
                id: task.id.clone(),
                completed: !task.completed,
            },
            delete: TaskAction::Remove {
                id: task.id.clone(),
            },
        })
        .collect()
}

/// Rendering target driven by the sync client
pub trait TaskView {
    /// Replace everything currently shown with `rows`
    fn show(&self, rows: Vec<TaskRow>);

    /// Empty the new-task input
    fn clear_input(&self);
}
