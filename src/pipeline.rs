// src/pipeline.rs
//! The top-level driver — a fixed, fully sequential run.
//!
//! Step order: access check → backup → scrape → sync. Every step after
//! browser launch is best-effort: it logs its own failures and the run
//! moves on with degraded data. The browser session is released exactly
//! once, on every exit path.

use crate::api::NotionRepository;
use crate::browser::{self, DomSurface};
use crate::config::SyncConfig;
use crate::error::AppError;
use crate::{access, backup, sync};

/// Drives one complete run against an already-launched browser session.
///
/// Whatever the steps do, the session is shut down before this function
/// returns.
pub async fn execute<S: DomSurface>(
    config: &SyncConfig,
    repo: &dyn NotionRepository,
    surface: &mut S,
) -> Result<(), AppError> {
    let outcome = run_steps(config, repo, surface).await;

    if let Err(err) = surface.shutdown().await {
        log::warn!("Browser session shutdown reported an error: {}", err);
    }

    outcome
}

async fn run_steps<S: DomSurface>(
    config: &SyncConfig,
    repo: &dyn NotionRepository,
    surface: &mut S,
) -> Result<(), AppError> {
    access::run(repo, &config.page_id).await;

    backup::run(repo, &config.page_id, &config.backup_path).await;

    let favorites = browser::scrape_first_favorite(surface, &config.favorites_url).await;

    sync::run(repo, config, &favorites).await;

    Ok(())
}
