use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::calculation::{CalculationOutcome, StatusSweepSummary},
    dto::profile::RefreshBestRanksResponse,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/batch/contest-status/run",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Status sweep completed", body = StatusSweepSummary),
        (status = 401, description = "Unauthorized")
    ),
    tag = "batch"
)]
pub async fn run_status_sweep(State(db): State<Database>) -> Result<Response, WebError> {
    tracing::info!("Contest status sweep triggered via API");

    let summary = services::run_status_sweep(db.pool()).await?;

    Ok(Json(summary).into_response())
}

#[utoipa::path(
    post,
    path = "/api/batch/calculation/run",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Calculation run completed", body = Vec<CalculationOutcome>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Calculation failed and was rolled back")
    ),
    tag = "batch"
)]
pub async fn run_calculation(State(db): State<Database>) -> Result<Response, WebError> {
    tracing::info!("Result calculation triggered via API");

    let outcomes = services::run_calculation(db.pool()).await?;

    Ok(Json(outcomes).into_response())
}

#[utoipa::path(
    post,
    path = "/api/batch/profile-ranks/{contest_id}",
    params(
        ("contest_id" = i64, Path, description = "Finalized contest ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Best ranks refreshed", body = RefreshBestRanksResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "batch"
)]
pub async fn refresh_profile_ranks(
    State(db): State<Database>,
    Path(contest_id): Path<i64>,
) -> Result<Response, WebError> {
    let updated_rows = services::refresh_best_ranks(db.pool(), contest_id).await?;

    Ok(Json(RefreshBestRanksResponse {
        contest_id,
        updated_rows,
    })
    .into_response())
}
