use serde::{Deserialize, Serialize};

/// A to-do item as served by the upstream `todos` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "userId")]
    pub owner_id: i64,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(owner_id: i64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            owner_id,
            title: title.into(),
            completed,
        }
    }
}

/// A task joined with the username of its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelatedTask {
    pub owner_id: i64,
    pub username: String,
    pub title: String,
    pub completed: bool,
}
