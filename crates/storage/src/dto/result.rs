use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One row of an announced contest's result listing, joined with the
/// submission it ranks.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ContestResultDetail {
    pub photo_id: i64,
    pub user_id: String,
    pub photo_url: String,
    pub title: String,
    pub final_rank: i32,
    pub final_score: i32,
    pub is_winner: bool,
    pub calculated_at: DateTime<Utc>,
}

/// A winning photo of an announced contest. Several rows exist when the
/// top rank is tied.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ContestWinner {
    pub photo_id: i64,
    pub user_id: String,
    pub photo_url: String,
    pub title: String,
    pub final_score: i32,
}
