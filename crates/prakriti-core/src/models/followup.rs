//! Follow-up task model.

use serde::{Deserialize, Serialize};

/// A single follow-up task. The collection lives independently of the quiz
/// and persists until explicitly cleared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FollowUpTask {
    /// Unique task ID
    pub id: String,
    /// Task title
    pub title: String,
    /// Optional note
    pub note: Option<String>,
    /// Optional due date (ISO date string; formatting is the caller's job)
    pub due: Option<String>,
    /// Completion flag, toggled explicitly only
    pub done: bool,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl FollowUpTask {
    /// Create an open task with a fresh id and timestamp.
    pub fn new(title: impl Into<String>, note: Option<String>, due: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            note,
            due,
            done: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Starter tasks seeded when no collection has ever been stored.
pub fn default_tasks() -> Vec<FollowUpTask> {
    vec![
        FollowUpTask::new("Daily walk / gentle exercise", None, None),
        FollowUpTask::new("Follow recommended breakfast", None, None),
        FollowUpTask::new("Stay hydrated (warm water / herbal tea)", None, None),
    ]
}
