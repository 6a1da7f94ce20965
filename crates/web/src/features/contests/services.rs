use sqlx::PgPool;
use storage::{
    dto::common::PaginationParams,
    dto::contest::CreateContestRequest,
    error::Result,
    models::Contest,
    repository::contest::ContestRepository,
};

/// List contests that are running or awaiting results
pub async fn list_contests(pool: &PgPool) -> Result<Vec<Contest>> {
    let repo = ContestRepository::new(pool);
    repo.list_active().await
}

/// List announced contests with the total count for pagination
pub async fn list_announced_contests(
    pool: &PgPool,
    pagination: &PaginationParams,
) -> Result<(Vec<Contest>, i64)> {
    let repo = ContestRepository::new(pool);

    let contests = repo.list_announced(pagination).await?;
    let total_items = repo.count_announced().await?;

    Ok((contests, total_items))
}

/// Get contest by ID
pub async fn get_contest(pool: &PgPool, contest_id: i64) -> Result<Contest> {
    let repo = ContestRepository::new(pool);
    repo.find_by_id(contest_id).await
}

/// Create a new contest
pub async fn create_contest(pool: &PgPool, request: &CreateContestRequest) -> Result<Contest> {
    let repo = ContestRepository::new(pool);
    repo.create(request).await
}
