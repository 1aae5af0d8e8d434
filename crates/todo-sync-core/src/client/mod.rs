//! Task Sync Client
//!
//! Keeps a `TaskView` in step with the remote collection by reloading the
//! whole list after every successful mutation. Failures are logged and
//! dropped: no retry, nothing shown to the user, display left as it was.

use std::rc::Rc;

use log::{debug, error};

use crate::api::TaskApi;
use crate::models::TaskId;
use crate::view::{render, TaskAction, TaskView};


/// Refresh-cycle client over a remote task API and a display surface.
///
/// Clones share the same transport and view, so each event handler can own
/// a handle for the future it spawns. Overlapping operations are not
/// coordinated; whichever refresh resolves last is what stays on screen.
pub struct TaskSyncClient<A, V> {
    api: Rc<A>,
    view: V,
}

impl<A, V: Clone> Clone for TaskSyncClient<A, V> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            view: self.view.clone(),
        }
    }
}

impl<A: TaskApi, V: TaskView> TaskSyncClient<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api: Rc::new(api),
            view,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Reload the whole collection and re-render it.
    ///
    /// On failure the current display is kept.
    pub async fn refresh(&self) {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                debug!("Loaded {} tasks", tasks.len());
                self.view.show(render(&tasks));
            }
            Err(e) => error!("Error fetching tasks: {}", e),
        }
    }

    /// Create a task from user input.
    ///
    /// Input that is empty after trimming is ignored without a request.
    pub async fn create(&self, content: &str) {
        let content = content.trim();
        if content.is_empty() {
            debug!("Ignoring empty task submission");
            return;
        }

        match self.api.create_task(content).await {
            Ok(()) => {
                self.view.clear_input();
                self.refresh().await;
            }
            Err(e) => error!("Error adding task: {}", e),
        }
    }

    pub async fn set_completed(&self, id: &TaskId, completed: bool) {
        match self.api.set_completed(id, completed).await {
            Ok(()) => self.refresh().await,
            Err(e) => error!("Error toggling task {}: {}", id, e),
        }
    }

    pub async fn remove(&self, id: &TaskId) {
        match self.api.delete_task(id).await {
            Ok(()) => self.refresh().await,
            Err(e) => error!("Error deleting task {}: {}", id, e),
        }
    }

    /// Run the operation behind a row action
    pub async fn dispatch(&self, action: TaskAction) {
        match action {
            TaskAction::SetCompleted { id, completed } => self.set_completed(&id, completed).await,
            TaskAction::Remove { id } => self.remove(&id).await,
        }
    }
}
