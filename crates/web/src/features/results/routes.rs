use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_contest_results, get_contest_winners};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/:id/results", get(get_contest_results))
        .route("/:id/winners", get(get_contest_winners))
}
