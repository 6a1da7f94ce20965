use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use crate::middleware::auth::{ApiKeys, require_api_key};

use super::handlers::{create_contest, get_contest, list_announced_contests, list_contests};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/", post(create_contest))
        .route_layer(middleware::from_fn_with_state(api_keys, require_api_key))
        .route("/", get(list_contests))
        .route("/announced", get(list_announced_contests))
        .route("/:id", get(get_contest))
}
