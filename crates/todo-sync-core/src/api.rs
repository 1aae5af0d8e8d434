//! Remote Task API
//!
//! Abstract interface to the task collection endpoint.
//! `HttpTaskApi` talks REST; tests plug in an in-memory fake.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Task, TaskId};

/// CRUD operations the client needs from the remote collection.
///
/// Futures are not `Send`: in the browser they run on the single event loop.
#[async_trait(?Send)]
pub trait TaskApi {
    /// Fetch the whole collection, in server order
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    /// Create a task; the assigned id is not returned
    async fn create_task(&self, content: &str) -> ApiResult<()>;

    /// Set the completion flag of one task
    async fn set_completed(&self, id: &TaskId, completed: bool) -> ApiResult<()>;

    /// Delete one task
    async fn delete_task(&self, id: &TaskId) -> ApiResult<()>;
}
