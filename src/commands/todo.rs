//! Task Commands
//!
//! Frontend bindings for the four task operations.

use serde::{Deserialize, Serialize};

use super::{read_json, send};
use crate::models::{Todo, TodoId};

/// Task record as the backend serves it.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteTodo {
    #[serde(rename = "_id")]
    pub id: String,
    pub description: String,
    /// Records predating the field may omit it; treat as not completed.
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: String,
}

impl From<RemoteTodo> for Todo {
    fn from(remote: RemoteTodo) -> Self {
        Todo {
            id: TodoId::Confirmed(remote.id),
            description: remote.description,
            completed: remote.completed,
            created_at: remote.created_at,
        }
    }
}

#[derive(Serialize)]
struct CreateTodoArgs<'a> {
    description: &'a str,
}

/// Partial update body; absent fields are left untouched by the backend.
#[derive(Debug, Serialize)]
pub struct TodoPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

pub async fn list_todos() -> Result<Vec<RemoteTodo>, String> {
    let response = send("GET", "/todos", None).await?;
    read_json(response).await
}

pub async fn create_todo(description: &str) -> Result<RemoteTodo, String> {
    let body = serde_json::to_string(&CreateTodoArgs { description }).map_err(|e| e.to_string())?;
    let response = send("POST", "/todos", Some(body)).await?;
    read_json(response).await
}

/// The client only needs the success status; the response body is ignored.
pub async fn patch_todo(id: &str, patch: &TodoPatch<'_>) -> Result<(), String> {
    let body = serde_json::to_string(patch).map_err(|e| e.to_string())?;
    send("PATCH", &format!("/todos/{id}"), Some(body)).await?;
    Ok(())
}

pub async fn delete_todo(id: &str) -> Result<(), String> {
    send("DELETE", &format!("/todos/{id}"), None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_completed_defaults_to_false() {
        let remote: RemoteTodo = serde_json::from_str(
            r#"{"_id": "65a1", "description": "buy milk", "created_at": "2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(!remote.completed);

        let todo = Todo::from(remote);
        assert_eq!(todo.id, TodoId::Confirmed("65a1".to_string()));
    }

    #[test]
    fn patch_serializes_only_the_set_fields() {
        let patch = TodoPatch {
            description: None,
            completed: Some(true),
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"completed":true}"#);

        let patch = TodoPatch {
            description: Some("buy milk"),
            completed: None,
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"description":"buy milk"}"#
        );
    }

    #[test]
    fn list_payload_deserializes() {
        let remotes: Vec<RemoteTodo> = serde_json::from_str(
            r#"[{"_id": "a", "description": "one", "completed": true, "created_at": "2024-01-01T00:00:00Z"},
                {"_id": "b", "description": "two"}]"#,
        )
        .unwrap();
        assert_eq!(remotes.len(), 2);
        assert!(remotes[0].completed);
        assert_eq!(remotes[1].created_at, "");
    }
}
