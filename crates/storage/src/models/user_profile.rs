use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Denormalized per-user statistics. `best_rank` is maintained by the
/// profile rank refresher; the other counters belong to the submission and
/// entry write paths.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub best_rank: Option<i32>,
    pub total_posts: i32,
    pub total_contests_entered: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
