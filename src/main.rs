// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_favsync::browser::ChromeSession;
use notion_favsync::config::{CommandLineInput, SyncConfig};
use notion_favsync::constants::LOG_FILE_NAME;
use notion_favsync::{pipeline, NotionHttpClient};
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}";

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).map_err(|e| anyhow::anyhow!("logging setup failed: {e}"))?;

    let config = SyncConfig::resolve(cli)?;
    // The Display impl truncates the key; the full secret never reaches a log line.
    log::info!(
        "Configuration resolved: key {}, page {}, database {}, favorites at {}",
        config.api_key,
        config.page_id,
        config.database_id,
        config.favorites_url
    );

    let repo = NotionHttpClient::new(&config.api_key)?;

    // Fatal if the driver cannot come up; nothing downstream can run
    // without a session.
    let mut session = ChromeSession::launch(&config.driver_path, config.headless).await?;

    pipeline::execute(&config, &repo, &mut session).await?;

    log::info!("Run complete");
    Ok(())
}
