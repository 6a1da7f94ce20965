use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod scheduler;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::contests::handlers::list_contests,
        features::contests::handlers::list_announced_contests,
        features::contests::handlers::get_contest,
        features::contests::handlers::create_contest,
        features::results::handlers::get_contest_results,
        features::results::handlers::get_contest_winners,
        features::profiles::handlers::get_user_profile,
        features::batch::handlers::run_status_sweep,
        features::batch::handlers::run_calculation,
        features::batch::handlers::refresh_profile_ranks,
    ),
    components(
        schemas(
            storage::dto::contest::CreateContestRequest,
            storage::dto::contest::ContestResponse,
            storage::dto::result::ContestResultDetail,
            storage::dto::result::ContestWinner,
            storage::dto::profile::UserProfileResponse,
            storage::dto::profile::RefreshBestRanksResponse,
            storage::dto::calculation::CalculationOutcome,
            storage::dto::calculation::CalculationStatus,
            storage::dto::calculation::StatusSweepSummary,
            storage::dto::common::PaginationMeta,
            storage::models::Contest,
            storage::models::ContestStatus,
            storage::models::Submission,
            storage::models::ContestResult,
            storage::models::UserProfile,
        )
    ),
    tags(
        (name = "contests", description = "Public contest endpoints"),
        (name = "results", description = "Announced contest result endpoints"),
        (name = "profiles", description = "Public user profile endpoints"),
        (name = "batch", description = "Keyed batch triggers for the lifecycle jobs"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting photo contest API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    scheduler::spawn(db.clone(), &config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api/contests",
            features::contests::routes(api_keys.clone())
                .merge(features::results::routes()),
        )
        .nest("/api/users", features::profiles::routes())
        .nest("/api/batch", features::batch::routes(api_keys))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    axum::serve(listener, app).await?;

    Ok(())
}
