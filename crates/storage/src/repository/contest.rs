use sqlx::PgPool;

use crate::dto::common::PaginationParams;
use crate::dto::contest::CreateContestRequest;
use crate::error::{Result, StorageError};
use crate::models::{Contest, ContestStatus};

pub(crate) const CONTEST_COLUMNS: &str = "contest_id, name, theme, start_date, end_date, status, \
     created_by_user_id, created_at, updated_at, removed_at, removed_by_user_id, removed_reason";

/// Repository for Contest database operations
pub struct ContestRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContestRepository<'a> {
    /// Create a new ContestRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List contests that are still running or awaiting results.
    pub async fn list_active(&self) -> Result<Vec<Contest>> {
        let contests = sqlx::query_as::<_, Contest>(&format!(
            r#"
            SELECT {CONTEST_COLUMNS}
            FROM contests
            WHERE status <> $1
              AND removed_at IS NULL
            ORDER BY start_date ASC, contest_id ASC
            "#
        ))
        .bind(ContestStatus::Announced)
        .fetch_all(self.pool)
        .await?;

        Ok(contests)
    }

    /// List announced contests, newest end date first.
    pub async fn list_announced(&self, pagination: &PaginationParams) -> Result<Vec<Contest>> {
        let contests = sqlx::query_as::<_, Contest>(&format!(
            r#"
            SELECT {CONTEST_COLUMNS}
            FROM contests
            WHERE status = $1
              AND removed_at IS NULL
            ORDER BY end_date DESC, contest_id DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(ContestStatus::Announced)
        .bind(pagination.limit() as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(contests)
    }

    pub async fn count_announced(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM contests
            WHERE status = $1
              AND removed_at IS NULL
            "#,
        )
        .bind(ContestStatus::Announced)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Get a contest by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Contest> {
        let contest = sqlx::query_as::<_, Contest>(&format!(
            r#"
            SELECT {CONTEST_COLUMNS}
            FROM contests
            WHERE contest_id = $1
              AND removed_at IS NULL
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(contest)
    }

    /// Create a new contest in UPCOMING.
    pub async fn create(&self, req: &CreateContestRequest) -> Result<Contest> {
        let contest = sqlx::query_as::<_, Contest>(&format!(
            r#"
            INSERT INTO contests (name, theme, start_date, end_date, status, created_by_user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {CONTEST_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.theme)
        .bind(req.start_date)
        .bind(req.end_date)
        .bind(ContestStatus::Upcoming)
        .bind(&req.created_by_user_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                return StorageError::ConstraintViolation(
                    "A contest with this name already exists".to_string(),
                );
            }
            err
        })?;

        Ok(contest)
    }
}
