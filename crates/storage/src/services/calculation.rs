use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use crate::dto::calculation::CalculationOutcome;
use crate::error::{Result, StorageError};
use crate::models::{Contest, ContestStatus, NewContestResult, Submission};
use crate::repository::contest::CONTEST_COLUMNS;
use crate::services::ranking;

/// What the calculation run decided to do with one eligible contest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContestPlan {
    /// Status already reflects announced results; nothing to write.
    AlreadyCalculated,
    /// No live submissions; announce the contest with zero results.
    AnnounceEmpty,
    /// Persist this result batch, then announce.
    Persist(Vec<NewContestResult>),
}

/// Pure decision step, separated from the transactional executor so the
/// skip/empty/persist logic is testable without a database.
pub fn plan_contest(contest: &Contest, submissions: &[Submission]) -> ContestPlan {
    if contest.status == ContestStatus::Announced {
        return ContestPlan::AlreadyCalculated;
    }

    if submissions.is_empty() {
        return ContestPlan::AnnounceEmpty;
    }

    ContestPlan::Persist(ranking::rank_submissions(contest.contest_id, submissions))
}

/// Rank every contest whose voting window has closed and persist the
/// results.
///
/// The whole invocation is one transaction: a fatal error for any single
/// contest rolls back every contest processed in the same call, and the next
/// invocation starts over from stored state. That is safe because announced
/// contests are skipped as no-ops on re-entry.
pub async fn calculate_all_closed_contests(pool: &PgPool) -> Result<Vec<CalculationOutcome>> {
    let mut tx = pool.begin().await?;

    let contests = find_contests_needing_calculation(&mut tx).await?;

    if contests.is_empty() {
        tx.commit().await?;
        return Ok(vec![CalculationOutcome::nothing_to_calculate()]);
    }

    let mut outcomes = Vec::with_capacity(contests.len());
    for contest in &contests {
        outcomes.push(process_single_contest(&mut tx, contest).await?);
    }

    tx.commit().await?;

    Ok(outcomes)
}

async fn process_single_contest(
    conn: &mut PgConnection,
    contest: &Contest,
) -> Result<CalculationOutcome> {
    let contest_id = contest.contest_id;

    let submissions = find_submissions_for_calculation(&mut *conn, contest_id).await?;

    match plan_contest(contest, &submissions) {
        ContestPlan::AlreadyCalculated => Ok(CalculationOutcome::already_calculated(contest_id)),
        ContestPlan::AnnounceEmpty => {
            announce(&mut *conn, contest).await?;
            Ok(CalculationOutcome::success(
                contest_id,
                "Contest closed, no submissions found.",
                0,
            ))
        }
        ContestPlan::Persist(batch) => {
            replace_results(&mut *conn, contest_id, &batch).await?;
            announce(&mut *conn, contest).await?;

            tracing::info!(
                contest_id,
                inserted = batch.len(),
                "Calculated contest results"
            );

            Ok(CalculationOutcome::success(
                contest_id,
                "Calculation complete.",
                batch.len() as i64,
            ))
        }
    }
}

/// Contests whose voting window has closed and that are not yet announced.
async fn find_contests_needing_calculation(conn: &mut PgConnection) -> Result<Vec<Contest>> {
    let contests = sqlx::query_as::<_, Contest>(&format!(
        r#"
        SELECT {CONTEST_COLUMNS}
        FROM contests
        WHERE end_date <= now()
          AND status <> $1
          AND removed_at IS NULL
        ORDER BY contest_id ASC
        "#
    ))
    .bind(ContestStatus::Announced)
    .fetch_all(&mut *conn)
    .await?;

    Ok(contests)
}

async fn find_submissions_for_calculation(
    conn: &mut PgConnection,
    contest_id: i64,
) -> Result<Vec<Submission>> {
    let submissions = sqlx::query_as::<_, Submission>(
        r#"
        SELECT photo_id, contest_id, user_id, photo_url, title, description,
               total_votes, submitted_at, removed_at
        FROM photo_submissions
        WHERE contest_id = $1
          AND removed_at IS NULL
        ORDER BY submitted_at ASC
        "#,
    )
    .bind(contest_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(submissions)
}

/// Write the full result batch for one contest, replacing any prior set.
/// An inserted-row count that differs from the batch size is a fatal
/// integrity failure and aborts the invocation.
async fn replace_results(
    conn: &mut PgConnection,
    contest_id: i64,
    batch: &[NewContestResult],
) -> Result<()> {
    sqlx::query("DELETE FROM contest_results WHERE contest_id = $1")
        .bind(contest_id)
        .execute(&mut *conn)
        .await?;

    let mut builder = QueryBuilder::<Postgres>::new(
        "INSERT INTO contest_results (contest_id, photo_id, final_rank, final_score, is_winner) ",
    );
    builder.push_values(batch, |mut row, result| {
        row.push_bind(result.contest_id)
            .push_bind(result.photo_id)
            .push_bind(result.final_rank)
            .push_bind(result.final_score)
            .push_bind(result.is_winner);
    });

    let inserted = builder.build().execute(&mut *conn).await?.rows_affected();

    if inserted != batch.len() as u64 {
        return Err(StorageError::BatchCountMismatch {
            expected: batch.len(),
            actual: inserted,
        });
    }

    Ok(())
}

/// Move a contest to ANNOUNCED. Only forward moves are written; a contest
/// already at the terminal status is left untouched.
async fn announce(conn: &mut PgConnection, contest: &Contest) -> Result<()> {
    if !contest.status.precedes(ContestStatus::Announced) {
        return Ok(());
    }

    sqlx::query(
        r#"
        UPDATE contests
        SET status = $2, updated_at = now()
        WHERE contest_id = $1
          AND status <> $2
        "#,
    )
    .bind(contest.contest_id)
    .bind(ContestStatus::Announced)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap()
    }

    fn contest(status: ContestStatus) -> Contest {
        Contest {
            contest_id: 1,
            name: "Night skyline".to_string(),
            theme: "City lights".to_string(),
            start_date: ts(1),
            end_date: ts(8),
            status,
            created_by_user_id: "admin".to_string(),
            created_at: ts(1),
            updated_at: ts(1),
            removed_at: None,
            removed_by_user_id: None,
            removed_reason: None,
        }
    }

    fn submission(photo_id: i64, total_votes: i32, submitted_at: DateTime<Utc>) -> Submission {
        Submission {
            photo_id,
            contest_id: 1,
            user_id: format!("user-{photo_id}"),
            photo_url: format!("https://photos.example/{photo_id}.jpg"),
            title: format!("Photo {photo_id}"),
            description: None,
            total_votes,
            submitted_at,
            removed_at: None,
        }
    }

    #[test]
    fn test_announced_contest_is_skipped() {
        let plan = plan_contest(
            &contest(ContestStatus::Announced),
            &[submission(10, 5, ts(2))],
        );
        assert_eq!(plan, ContestPlan::AlreadyCalculated);
    }

    #[test]
    fn test_contest_without_submissions_is_announced_empty() {
        let plan = plan_contest(&contest(ContestStatus::ClosedVoting), &[]);
        assert_eq!(plan, ContestPlan::AnnounceEmpty);
    }

    #[test]
    fn test_closed_contest_yields_ranked_batch() {
        let submissions = vec![
            submission(10, 5, ts(2)),
            submission(11, 5, ts(3)),
            submission(12, 3, ts(4)),
        ];

        let plan = plan_contest(&contest(ContestStatus::ClosedVoting), &submissions);

        let ContestPlan::Persist(batch) = plan else {
            panic!("expected a persist plan");
        };
        assert_eq!(batch.len(), 3);

        let ranks: Vec<i32> = batch.iter().map(|r| r.final_rank).collect();
        assert_eq!(ranks, vec![1, 1, 3]);

        let winners: Vec<bool> = batch.iter().map(|r| r.is_winner).collect();
        assert_eq!(winners, vec![true, true, false]);
    }

    #[test]
    fn test_overdue_in_progress_contest_is_still_calculated() {
        // The voting window can close before the status sweep ever ran;
        // calculation must not depend on the sweep having caught up.
        let plan = plan_contest(
            &contest(ContestStatus::InProgress),
            &[submission(10, 2, ts(2))],
        );

        assert!(matches!(plan, ContestPlan::Persist(batch) if batch.len() == 1));
    }
}
