use sqlx::PgPool;
use storage::{
    dto::common::PaginationParams,
    dto::result::{ContestResultDetail, ContestWinner},
    error::{Result, StorageError},
    models::ContestStatus,
    repository::{contest::ContestRepository, contest_result::ContestResultRepository},
};

/// Detailed result rows for an announced contest, with the total count for
/// pagination. Contests that have not been announced yet are rejected so
/// partial standings never leak out.
pub async fn get_contest_results(
    pool: &PgPool,
    contest_id: i64,
    pagination: &PaginationParams,
) -> Result<(Vec<ContestResultDetail>, i64)> {
    require_announced(pool, contest_id).await?;

    let repo = ContestResultRepository::new(pool);

    let rows = repo.find_detailed_by_contest(contest_id, pagination).await?;
    let total_items = repo.count_by_contest(contest_id).await?;

    Ok((rows, total_items))
}

/// Winning photos of an announced contest
pub async fn get_contest_winners(pool: &PgPool, contest_id: i64) -> Result<Vec<ContestWinner>> {
    require_announced(pool, contest_id).await?;

    let repo = ContestResultRepository::new(pool);
    repo.find_winners_by_contest(contest_id).await
}

async fn require_announced(pool: &PgPool, contest_id: i64) -> Result<()> {
    let contest = ContestRepository::new(pool).find_by_id(contest_id).await?;

    if contest.status != ContestStatus::Announced {
        return Err(StorageError::ContestNotAnnounced);
    }

    Ok(())
}
