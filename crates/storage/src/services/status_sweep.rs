use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use crate::dto::calculation::StatusSweepSummary;
use crate::error::Result;
use crate::models::ContestStatus;

/// Advance every contest whose lifecycle is behind the clock.
///
/// Three bulk passes run in a fixed order inside one transaction, so a
/// contest whose whole window fits between two scheduler ticks still moves
/// through consecutive transitions in a single invocation. Each pass is a
/// conditional UPDATE on a single state-machine edge and affects zero rows
/// when nothing is newly eligible; any failure rolls back all three passes
/// and the next tick retries from the stored state.
pub async fn run_status_sweep(pool: &PgPool, now: DateTime<Utc>) -> Result<StatusSweepSummary> {
    let mut tx = pool.begin().await?;

    let moved_to_in_progress = open_started_contests(&mut tx, now).await?;
    let moved_to_closed_voting = close_ended_contests(&mut tx, now).await?;
    let moved_to_announced = announce_calculated_contests(&mut tx).await?;

    tx.commit().await?;

    let summary = StatusSweepSummary {
        moved_to_in_progress,
        moved_to_closed_voting,
        moved_to_announced,
    };

    if summary.total_moved() > 0 {
        tracing::info!(
            moved_to_in_progress,
            moved_to_closed_voting,
            moved_to_announced,
            "Contest status sweep moved contests"
        );
    }

    Ok(summary)
}

/// UPCOMING -> IN_PROGRESS once the start time has passed.
async fn open_started_contests(conn: &mut PgConnection, now: DateTime<Utc>) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE contests
        SET status = $2, updated_at = now()
        WHERE status = $1
          AND start_date <= $3
          AND removed_at IS NULL
        "#,
    )
    .bind(ContestStatus::Upcoming)
    .bind(ContestStatus::InProgress)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}

/// IN_PROGRESS -> CLOSED_VOTING once the end time has passed.
async fn close_ended_contests(conn: &mut PgConnection, now: DateTime<Utc>) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE contests
        SET status = $2, updated_at = now()
        WHERE status = $1
          AND end_date <= $3
          AND removed_at IS NULL
        "#,
    )
    .bind(ContestStatus::InProgress)
    .bind(ContestStatus::ClosedVoting)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}

/// CLOSED_VOTING -> ANNOUNCED, but only where a result set already exists.
/// The calculation run announces directly on its own path; this pass picks
/// up contests whose results landed without the status flip committing.
async fn announce_calculated_contests(conn: &mut PgConnection) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE contests c
        SET status = $2, updated_at = now()
        WHERE c.status = $1
          AND c.removed_at IS NULL
          AND EXISTS (
              SELECT 1 FROM contest_results cr
              WHERE cr.contest_id = c.contest_id
          )
        "#,
    )
    .bind(ContestStatus::ClosedVoting)
    .bind(ContestStatus::Announced)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}
