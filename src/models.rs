//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub text: String,
    /// "" | "YYYY-MM-DD" | "YYYY-MM-DDTHH:MM"
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default = "default_priority")]
    pub priority: String,
    /// Backend creation timestamp, epoch milliseconds
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<i64>,
}

fn default_priority() -> String {
    "Mid".to_string()
}

/// Shared task list (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborativeList {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub is_owner: bool,
}

/// User granted access to a collaborative list (the owner is not a member)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub username: String,
}

/// Account data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "u_id")]
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityQuestion {
    pub q_id: u32,
    pub q_content: String,
}

/// Which task collection an operation targets. Every task operation names
/// its scope explicitly; there is no global personal/collaborative mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskScope {
    Personal,
    Collaborative(u32),
}
