use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Finalized rank record for one submission, written once per contest
/// by the calculation run.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ContestResult {
    pub result_id: i64,
    pub contest_id: i64,
    pub photo_id: i64,
    pub final_rank: i32,
    pub final_score: i32,
    pub is_winner: bool,
    pub calculated_at: DateTime<Utc>,
}

/// Insert payload produced by the ranking engine. The database assigns
/// `result_id` and `calculated_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContestResult {
    pub contest_id: i64,
    pub photo_id: i64,
    pub final_rank: i32,
    pub final_score: i32,
    pub is_winner: bool,
}
