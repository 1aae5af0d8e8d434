//! Todo Sync Frontend App
//!
//! Single column: input form, task list, summary line.

use leptos::prelude::*;
use todo_sync_core::{ClientConfig, HttpTaskApi, TaskSummary};

use crate::components::{NewTaskForm, TaskList};
use crate::context::TaskContext;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let ctx = TaskContext::new(HttpTaskApi::new(&config));

    // Provide context to all children
    provide_context(ctx);

    // Load tasks on mount
    Effect::new(move |_| ctx.refresh());

    view! {
        <main class="todo-app">
            <h1>"To-Do List"</h1>

            <NewTaskForm />

            <TaskList />

            <p class="task-count">{move || ctx.rows.with(|rows| TaskSummary::of(rows).to_string())}</p>
        </main>
    }
}
