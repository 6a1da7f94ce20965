use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_user_profile;

pub fn routes() -> Router<Database> {
    Router::new().route("/:user_id/profile", get(get_user_profile))
}
