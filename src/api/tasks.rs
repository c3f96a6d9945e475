//! Task Endpoints
//!
//! Personal and collaborative task CRUD, dispatched on `TaskScope`.

use gloo_net::http::Request;
use serde::Serialize;
use serde_json::json;

use super::{decode, expect_ok, ApiError};
use crate::models::{Task, TaskScope};

// ========================
// Payload Structs
// ========================

/// Payload for creating a task
#[derive(Debug, Clone, Serialize)]
pub struct TaskDraft {
    pub text: String,
    pub date: String,
    pub checked: bool,
    pub priority: String,
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            date: task.date.clone(),
            checked: task.checked,
            priority: task.priority.clone(),
        }
    }
}

/// Fields editable from the edit modal
#[derive(Debug, Clone, Serialize)]
pub struct TaskEdit {
    pub text: String,
    pub date: String,
    pub priority: String,
}

fn collection_url(scope: TaskScope) -> String {
    match scope {
        TaskScope::Personal => "/api/tasks".to_string(),
        TaskScope::Collaborative(list_id) => {
            format!("/api/collaborative-lists/{list_id}/tasks")
        }
    }
}

fn task_url(scope: TaskScope, task_id: u32) -> String {
    format!("{}/{}", collection_url(scope), task_id)
}

// ========================
// Endpoints
// ========================

pub async fn list(scope: TaskScope) -> Result<Vec<Task>, ApiError> {
    let resp = Request::get(&collection_url(scope)).send().await?;
    decode(resp).await
}

pub async fn create(scope: TaskScope, draft: &TaskDraft) -> Result<Task, ApiError> {
    let resp = Request::post(&collection_url(scope))
        .json(draft)?
        .send()
        .await?;
    decode(resp).await
}

pub async fn update(scope: TaskScope, task_id: u32, edit: &TaskEdit) -> Result<Task, ApiError> {
    let resp = Request::put(&task_url(scope, task_id))
        .json(edit)?
        .send()
        .await?;
    decode(resp).await
}

pub async fn delete(scope: TaskScope, task_id: u32) -> Result<(), ApiError> {
    let resp = Request::delete(&task_url(scope, task_id)).send().await?;
    expect_ok(resp).await
}

/// Flip `checked`. The personal API has a dedicated toggle endpoint; the
/// collaborative API takes the new value through a regular update.
pub async fn toggle(scope: TaskScope, task: &Task) -> Result<Task, ApiError> {
    let resp = match scope {
        TaskScope::Personal => {
            Request::patch(&format!("/api/tasks/{}/toggle", task.id))
                .send()
                .await?
        }
        TaskScope::Collaborative(_) => {
            Request::put(&task_url(scope, task.id))
                .json(&json!({ "checked": !task.checked }))?
                .send()
                .await?
        }
    };
    decode(resp).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_draft_carries_everything_but_the_id() {
        let task = Task {
            id: 42,
            text: "water plants".to_string(),
            date: "2024-03-15T09:00".to_string(),
            checked: false,
            priority: "Low".to_string(),
            created_at: Some(1_700_000_000_000),
        };
        let draft = TaskDraft::from(&task);
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "text": "water plants",
                "date": "2024-03-15T09:00",
                "checked": false,
                "priority": "Low",
            })
        );
    }

    #[test]
    fn scope_urls() {
        assert_eq!(collection_url(TaskScope::Personal), "/api/tasks");
        assert_eq!(
            task_url(TaskScope::Collaborative(7), 3),
            "/api/collaborative-lists/7/tasks/3"
        );
    }
}
