use sqlx::PgPool;

use crate::dto::common::PaginationParams;
use crate::dto::result::{ContestResultDetail, ContestWinner};
use crate::error::Result;

/// Repository for reading finalized contest results. Writing result rows is
/// the calculation run's job and happens inside its transaction, not here.
pub struct ContestResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContestResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Number of result rows for a contest. Non-zero doubles as the
    /// "already calculated" marker used by the status sweep.
    pub async fn count_by_contest(&self, contest_id: i64) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM contest_results
            WHERE contest_id = $1
            "#,
        )
        .bind(contest_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Result rows joined with their submissions, best rank first.
    pub async fn find_detailed_by_contest(
        &self,
        contest_id: i64,
        pagination: &PaginationParams,
    ) -> Result<Vec<ContestResultDetail>> {
        let rows = sqlx::query_as::<_, ContestResultDetail>(
            r#"
            SELECT ps.photo_id, ps.user_id, ps.photo_url, ps.title,
                   cr.final_rank, cr.final_score, cr.is_winner, cr.calculated_at
            FROM contest_results cr
            INNER JOIN photo_submissions ps ON ps.photo_id = cr.photo_id
            WHERE cr.contest_id = $1
            ORDER BY cr.final_rank ASC, ps.submitted_at ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(contest_id)
        .bind(pagination.limit() as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// The winning photos of a contest. More than one row when the top
    /// rank is tied.
    pub async fn find_winners_by_contest(&self, contest_id: i64) -> Result<Vec<ContestWinner>> {
        let winners = sqlx::query_as::<_, ContestWinner>(
            r#"
            SELECT ps.photo_id, ps.user_id, ps.photo_url, ps.title, cr.final_score
            FROM contest_results cr
            INNER JOIN photo_submissions ps ON ps.photo_id = cr.photo_id
            WHERE cr.contest_id = $1
              AND cr.is_winner
            ORDER BY ps.submitted_at ASC
            "#,
        )
        .bind(contest_id)
        .fetch_all(self.pool)
        .await?;

        Ok(winners)
    }
}
