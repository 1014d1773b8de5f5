use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// --- Tables ---

/// A course a user put on their personal list. Unique per (user_id, url).
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct SavedCourse {
    pub user_id: i64,
    pub title: String,
    pub url: String,
    pub saved_at: DateTime<Utc>,
}

/// Result of a save that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}
