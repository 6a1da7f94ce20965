use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::{PaginatedResponse, PaginationParams},
    dto::result::{ContestResultDetail, ContestWinner},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/contests/{id}/results",
    params(
        ("id" = i64, Path, description = "Contest ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Final standings of an announced contest", body = PaginatedResponse<ContestResultDetail>),
        (status = 404, description = "Contest not found"),
        (status = 409, description = "Contest results are not announced yet")
    ),
    tag = "results"
)]
pub async fn get_contest_results(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let (rows, total_items) = services::get_contest_results(db.pool(), id, &pagination).await?;

    let response = PaginatedResponse::new(
        rows,
        pagination.page,
        pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/contests/{id}/winners",
    params(
        ("id" = i64, Path, description = "Contest ID")
    ),
    responses(
        (status = 200, description = "Winning photos of an announced contest", body = Vec<ContestWinner>),
        (status = 404, description = "Contest not found"),
        (status = 409, description = "Contest results are not announced yet")
    ),
    tag = "results"
)]
pub async fn get_contest_winners(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let winners = services::get_contest_winners(db.pool(), id).await?;

    Ok(Json(winners).into_response())
}
