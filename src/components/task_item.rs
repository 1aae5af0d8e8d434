//! Task Item Component
//!
//! Individual row in the task list.

use leptos::prelude::*;
use todo_sync_core::TaskRow;

use crate::context::TaskContext;

/// A single task row with complete/undo and delete buttons
#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = expect_context::<TaskContext>();

    let toggle = row.toggle.clone();
    let delete = row.delete.clone();

    view! {
        <li class=row.row_class() data-id=row.id.to_string()>
            <span class="task-content" style=row.content_style()>{row.content.clone()}</span>
            <button class="toggle-btn" on:click=move |_| ctx.dispatch(toggle.clone())>
                {row.toggle_label()}
            </button>
            <button class="delete-btn" on:click=move |_| ctx.dispatch(delete.clone())>
                {row.delete_label()}
            </button>
        </li>
    }
}
