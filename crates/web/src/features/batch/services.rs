use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::calculation::{CalculationOutcome, CalculationStatus, StatusSweepSummary},
    error::Result,
    services::{calculation, profile_rank, status_sweep},
};

/// Run the three status transition passes once.
pub async fn run_status_sweep(pool: &PgPool) -> Result<StatusSweepSummary> {
    status_sweep::run_status_sweep(pool, Utc::now()).await
}

/// Run the calculation batch, then refresh best ranks for every contest it
/// finalized.
///
/// The refresh runs after the calculation transaction has committed: a rank
/// refresh failure is logged and skipped rather than undoing an ANNOUNCED
/// contest.
pub async fn run_calculation(pool: &PgPool) -> Result<Vec<CalculationOutcome>> {
    let outcomes = calculation::calculate_all_closed_contests(pool).await?;

    for outcome in &outcomes {
        if outcome.status != CalculationStatus::Success {
            continue;
        }
        let Some(contest_id) = outcome.contest_id else {
            continue;
        };

        if let Err(e) = profile_rank::refresh_best_ranks_for_contest(pool, contest_id).await {
            tracing::warn!(
                contest_id,
                error = %e,
                "Best rank refresh failed after calculation; contest stays announced"
            );
        }
    }

    Ok(outcomes)
}

/// Recompute best ranks for one finalized contest.
pub async fn refresh_best_ranks(pool: &PgPool, contest_id: i64) -> Result<u64> {
    profile_rank::refresh_best_ranks_for_contest(pool, contest_id).await
}
