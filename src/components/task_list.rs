//! Task List Component
//!
//! Rebuilds every row whenever a fetch lands; no keyed diffing.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::context::TaskContext;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = expect_context::<TaskContext>();

    view! {
        <ul id="tasks-list" class="task-list">
            {move || {
                ctx.rows
                    .get()
                    .into_iter()
                    .map(|row| view! { <TaskItem row=row /> })
                    .collect_view()
            }}
        </ul>
    }
}
