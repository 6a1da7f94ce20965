use std::time::Duration;

use storage::Database;

use crate::config::Config;
use crate::features::batch;

/// Spawn the background jobs that stand in for an external scheduler: one
/// interval loop per batch, each running its invocation to completion before
/// the next tick.
///
/// A failed invocation only logs; storage-level rollback leaves state
/// untouched and the next tick (or a manual trigger, which may overlap
/// safely) retries it.
pub fn spawn(db: Database, config: &Config) {
    if !config.scheduler_enabled {
        tracing::info!("Background scheduler disabled by configuration");
        return;
    }

    let sweep_db = db.clone();
    let sweep_every = Duration::from_secs(config.status_sweep_interval_secs);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_every);
        loop {
            interval.tick().await;

            if let Err(e) = batch::services::run_status_sweep(sweep_db.pool()).await {
                tracing::error!(error = %e, "Contest status sweep tick failed");
            }
        }
    });

    let calc_db = db;
    let calc_every = Duration::from_secs(config.calculation_interval_secs);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(calc_every);
        loop {
            interval.tick().await;

            if let Err(e) = batch::services::run_calculation(calc_db.pool()).await {
                tracing::error!(error = %e, "Result calculation tick failed");
            }
        }
    });

    tracing::info!(
        status_sweep_interval_secs = config.status_sweep_interval_secs,
        calculation_interval_secs = config.calculation_interval_secs,
        "Background scheduler started"
    );
}
