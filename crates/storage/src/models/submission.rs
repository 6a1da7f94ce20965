use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One user's single photo entry into one contest.
///
/// `total_votes` is denormalized by the voting write path; the ranking
/// engine reads it as authoritative and never mutates a submission.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Submission {
    pub photo_id: i64,
    pub contest_id: i64,
    pub user_id: String,
    pub photo_url: String,
    pub title: String,
    pub description: Option<String>,
    pub total_votes: i32,
    pub submitted_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
}
