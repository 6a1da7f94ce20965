use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::{PaginatedResponse, PaginationParams},
    dto::contest::{ContestResponse, CreateContestRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/contests",
    responses(
        (status = 200, description = "List running and voting contests", body = Vec<ContestResponse>)
    ),
    tag = "contests"
)]
pub async fn list_contests(
    State(db): State<Database>,
) -> Result<Json<Vec<ContestResponse>>, WebError> {
    let contests = services::list_contests(db.pool()).await?;

    let response: Vec<ContestResponse> = contests.into_iter().map(ContestResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/contests/announced",
    params(PaginationParams),
    responses(
        (status = 200, description = "List announced contests", body = PaginatedResponse<ContestResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "contests"
)]
pub async fn list_announced_contests(
    State(db): State<Database>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, WebError> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let (contests, total_items) =
        services::list_announced_contests(db.pool(), &pagination).await?;

    let entries: Vec<ContestResponse> =
        contests.into_iter().map(ContestResponse::from).collect();

    let response = PaginatedResponse::new(
        entries,
        pagination.page,
        pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/contests/{id}",
    params(
        ("id" = i64, Path, description = "Contest ID")
    ),
    responses(
        (status = 200, description = "Contest found", body = ContestResponse),
        (status = 404, description = "Contest not found")
    ),
    tag = "contests"
)]
pub async fn get_contest(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let contest = services::get_contest(db.pool(), id).await?;

    Ok(Json(ContestResponse::from(contest)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/contests",
    request_body = CreateContestRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Contest created successfully", body = ContestResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Contest name already exists")
    ),
    tag = "contests"
)]
pub async fn create_contest(
    State(db): State<Database>,
    Json(req): Json<CreateContestRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_dates().map_err(WebError::BadRequest)?;

    let contest = services::create_contest(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(ContestResponse::from(contest))).into_response())
}
