use axum::{Router, middleware, routing::post};
use storage::Database;

use crate::middleware::auth::{ApiKeys, require_api_key};

use super::handlers::{refresh_profile_ranks, run_calculation, run_status_sweep};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/contest-status/run", post(run_status_sweep))
        .route("/calculation/run", post(run_calculation))
        .route("/profile-ranks/:contest_id", post(refresh_profile_ranks))
        .route_layer(middleware::from_fn_with_state(api_keys, require_api_key))
}
