//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync_core::{HttpTaskApi, TaskAction, TaskRow, TaskSyncClient, TaskView};

/// Display surface backed by signals
#[derive(Clone, Copy)]
pub struct SignalView {
    set_rows: WriteSignal<Vec<TaskRow>>,
    set_input: WriteSignal<String>,
}

impl TaskView for SignalView {
    fn show(&self, rows: Vec<TaskRow>) {
        self.set_rows.set(rows);
    }

    fn clear_input(&self) {
        self.set_input.set(String::new());
    }
}

pub type AppClient = TaskSyncClient<HttpTaskApi, SignalView>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct TaskContext {
    /// Rows from the latest successful fetch
    pub rows: ReadSignal<Vec<TaskRow>>,
    /// New-task input text - read
    pub input: ReadSignal<String>,
    /// New-task input text - write
    set_input: WriteSignal<String>,
    /// Sync client; holds an `Rc`, so it lives in local storage
    client: StoredValue<AppClient, LocalStorage>,
}

impl TaskContext {
    pub fn new(api: HttpTaskApi) -> Self {
        let (rows, set_rows) = signal(Vec::<TaskRow>::new());
        let (input, set_input) = signal(String::new());
        let client = TaskSyncClient::new(api, SignalView { set_rows, set_input });

        Self {
            rows,
            input,
            set_input,
            client: StoredValue::new_local(client),
        }
    }

    pub fn set_input(&self, text: String) {
        self.set_input.set(text);
    }

    /// Reload the task list from the server
    pub fn refresh(&self) {
        let client = self.client.get_value();
        spawn_local(async move {
            client.refresh().await;
        });
    }

    /// Create a task from the current input
    pub fn submit(&self) {
        let client = self.client.get_value();
        let content = self.input.get_untracked();
        spawn_local(async move {
            client.create(&content).await;
        });
    }

    /// Run a row action (toggle or delete)
    pub fn dispatch(&self, action: TaskAction) {
        let client = self.client.get_value();
        spawn_local(async move {
            client.dispatch(action).await;
        });
    }
}
