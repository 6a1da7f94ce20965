use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::profile::UserProfileResponse};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/profile",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile found", body = UserProfileResponse),
        (status = 404, description = "User profile not found")
    ),
    tag = "profiles"
)]
pub async fn get_user_profile(
    State(db): State<Database>,
    Path(user_id): Path<String>,
) -> Result<Response, WebError> {
    let profile = services::get_user_profile(db.pool(), &user_id).await?;

    Ok(Json(UserProfileResponse::from(profile)).into_response())
}
