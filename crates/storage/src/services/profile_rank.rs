use sqlx::PgPool;

use crate::error::Result;

/// Recompute `best_rank` for every user who holds a result in the given
/// contest.
///
/// The aggregate is the minimum final rank across all contests the user has
/// a result row in, so running this zero, one, or many times for the same
/// contest converges on the same value. It runs as a single statement
/// outside the calculation transaction: a failure here never undoes a
/// contest's ANNOUNCED transition.
pub async fn refresh_best_ranks_for_contest(pool: &PgPool, contest_id: i64) -> Result<u64> {
    tracing::info!(contest_id, "Refreshing best ranks");

    let result = sqlx::query(
        r#"
        UPDATE user_profiles up
        SET best_rank = agg.best_rank, updated_at = now()
        FROM (
            SELECT ps.user_id, MIN(cr.final_rank) AS best_rank
            FROM contest_results cr
            INNER JOIN photo_submissions ps ON ps.photo_id = cr.photo_id
            GROUP BY ps.user_id
        ) agg
        WHERE up.user_id = agg.user_id
          AND up.user_id IN (
              SELECT ps.user_id
              FROM contest_results cr
              INNER JOIN photo_submissions ps ON ps.photo_id = cr.photo_id
              WHERE cr.contest_id = $1
          )
        "#,
    )
    .bind(contest_id)
    .execute(pool)
    .await?;

    let updated = result.rows_affected();
    tracing::info!(contest_id, updated, "Finished refreshing best ranks");

    Ok(updated)
}
