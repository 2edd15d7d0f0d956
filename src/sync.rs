// src/sync.rs
//! Mirrors scraped favorite links into the workspace through two
//! independent write paths: one paragraph block per link appended to the
//! target page, and one row per link created in the target database.
//!
//! The two paths share no transaction. A failure in either is logged
//! and leaves the other's effects in place.

use crate::api::{NotionRepository, ParagraphBlock, RowProperties};
use crate::config::SyncConfig;
use crate::types::FavoriteLink;

/// Runs the sync step over the scraped links.
///
/// The page append is issued even when `favorites` is empty (a no-op
/// write); database rows are only created for links that exist.
pub async fn run(repo: &dyn NotionRepository, config: &SyncConfig, favorites: &[FavoriteLink]) {
    let blocks: Vec<ParagraphBlock> = favorites
        .iter()
        .map(|favorite| ParagraphBlock::from_text(favorite.as_str()))
        .collect();
    let block_count = blocks.len();

    match repo.append_blocks(&config.page_id, blocks).await {
        Ok(()) => log::info!(
            "Appended {} paragraph block(s) to page {}",
            block_count,
            config.page_id
        ),
        Err(err) => log::error!(
            "Failed to append blocks to page {}: {}",
            config.page_id,
            err
        ),
    }

    for favorite in favorites {
        match repo
            .create_row(&config.database_id, RowProperties::titled(favorite.as_str()))
            .await
        {
            Ok(()) => log::info!(
                "Created row for {} in database {}",
                favorite,
                config.database_id
            ),
            Err(err) => log::error!(
                "Failed to create row for {} in database {}: {}",
                favorite,
                config.database_id,
                err
            ),
        }
    }
}
