//! New Task Form Component

use leptos::prelude::*;

use crate::context::TaskContext;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = expect_context::<TaskContext>();

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form id="task-form" class="task-form" on:submit=create_task>
            <input
                id="new-task-input"
                type="text"
                placeholder="Add a new task..."
                prop:value=move || ctx.input.get()
                on:input=move |ev| ctx.set_input(event_target_value(&ev))
            />
            <button type="submit">"Add Task"</button>
        </form>
    }
}
