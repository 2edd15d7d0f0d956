// src/config.rs
use crate::constants::BACKUP_FILE_NAME;
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId, PageId, ValidatedUrl};
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line input.
///
/// Everything the run needs to reach the outside world comes from the
/// environment; the CLI only tunes observability and the browser
/// window.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Run the browser with a visible window instead of headless
    #[arg(long, default_value_t = false)]
    pub headful: bool,
}

/// Resolved run configuration — validated and ready to drive every step.
///
/// Constructed once at startup and passed by reference; no step reads
/// the environment after resolution.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub api_key: ApiKey,
    pub page_id: PageId,
    pub database_id: DatabaseId,
    pub favorites_url: ValidatedUrl,
    pub driver_path: PathBuf,
    pub backup_path: PathBuf,
    pub headless: bool,
    pub verbose: bool,
}

impl SyncConfig {
    /// Resolves a complete configuration from CLI input and the process
    /// environment. Any missing or malformed required value aborts the
    /// run before a remote or browser connection is attempted.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, |name| std::env::var(name).ok())
    }

    /// Resolution against an arbitrary environment lookup; the seam that
    /// lets tests exercise every missing-variable combination without
    /// touching the process environment.
    pub fn resolve_with(
        cli: CommandLineInput,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let api_key = ApiKey::new(require(&lookup, "NOTION_API_KEY")?)?;
        let page_id = PageId::parse(&require(&lookup, "NOTION_PAGE_ID")?)?;
        let database_id = DatabaseId::parse(&require(&lookup, "NOTION_DATABASE_ID")?)?;
        let favorites_url = ValidatedUrl::parse(&require(&lookup, "FAVORITES_PAGE_URL")?)?;
        let driver_path = PathBuf::from(require(&lookup, "CHROMEDRIVER_PATH")?);

        Ok(SyncConfig {
            api_key,
            page_id,
            database_id,
            favorites_url,
            driver_path,
            backup_path: PathBuf::from(BACKUP_FILE_NAME),
            headless: !cli.headful,
            verbose: cli.verbose,
        })
    }
}

/// Reads one required environment value; absent or blank both count as
/// missing.
fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<String, AppError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::MissingConfiguration(format!(
            "{} environment variable not set",
            name
        ))),
    }
}
