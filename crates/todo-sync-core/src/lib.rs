//! Todo Sync Core
//!
//! Browser-independent half of the todo client:
//! - models: task entity and request bodies
//! - api / http: remote collection interface and its REST implementation
//! - view: display surface trait and the task -> row projection
//! - client: the refresh-after-every-mutation sync loop

mod api;
mod client;
mod config;
mod error;
mod http;
mod models;
mod view;

pub use api::TaskApi;
pub use client::TaskSyncClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_LOG_LEVEL};
pub use error::{ApiError, ApiResult, ConfigError};
pub use http::HttpTaskApi;
pub use models::{Task, TaskId};
pub use view::{render, TaskAction, TaskRow, TaskSummary, TaskView};
