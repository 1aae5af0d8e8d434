//! Task Models
//!
//! Data structures matching the remote task collection.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Task identifier assigned by the server.
///
/// Opaque to the client: it is only ever echoed back in a request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        TaskId::Number(id)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId::Text(id.to_string())
    }
}

/// Task data structure (matches the list endpoint)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    #[serde(deserialize_with = "flag_from_bool_or_int")]
    pub completed: bool,
}

// The server stores `completed` in a SQL boolean column and may emit 0/1.
fn flag_from_bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub(crate) struct NewTaskBody<'a> {
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompletionBody {
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_numeric_id_and_bool_flag() {
        let task: Task =
            serde_json::from_value(json!({"id": 1, "content": "buy milk", "completed": false}))
                .unwrap();

        assert_eq!(task.id, TaskId::Number(1));
        assert_eq!(task.content, "buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_decode_integer_flag() {
        let tasks: Vec<Task> = serde_json::from_value(json!([
            {"id": 7, "content": "a", "completed": 1},
            {"id": 8, "content": "b", "completed": 0},
        ]))
        .unwrap();

        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_decode_text_id_and_ignores_extra_fields() {
        let task: Task = serde_json::from_value(json!({
            "id": "a1b2",
            "content": "write report",
            "completed": true,
            "date_created": "Mon, 01 Jan 2024 00:00:00 GMT"
        }))
        .unwrap();

        assert_eq!(task.id, TaskId::Text("a1b2".to_string()));
        assert!(task.completed);
    }

    #[test]
    fn test_decode_rejects_missing_content() {
        let result: Result<Task, _> = serde_json::from_value(json!({"id": 1, "completed": false}));
        assert!(result.is_err());
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId::Number(42).to_string(), "42");
        assert_eq!(TaskId::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_request_bodies() {
        assert_eq!(
            serde_json::to_value(NewTaskBody { content: "x" }).unwrap(),
            json!({"content": "x"})
        );
        assert_eq!(
            serde_json::to_value(CompletionBody { completed: true }).unwrap(),
            json!({"completed": true})
        );
    }
}
