// src/backup.rs
//! Pre-sync backup of the target page's child blocks.
//!
//! The listing response is persisted verbatim; this program never reads
//! the snapshot back, it exists for manual recovery after a bad sync.

use crate::api::NotionRepository;
use crate::error::AppError;
use crate::types::PageId;
use std::fs;
use std::path::Path;

/// Runs the backup step. Best-effort: a failed backup is logged and the
/// run continues without a fresh snapshot.
pub async fn run(repo: &dyn NotionRepository, page_id: &PageId, path: &Path) {
    match snapshot(repo, page_id, path).await {
        Ok(()) => log::info!(
            "Backed up child blocks of page {} to {}",
            page_id,
            path.display()
        ),
        Err(err) => log::error!(
            "Failed to back up page {}: {} (continuing without a fresh snapshot)",
            page_id,
            err
        ),
    }
}

/// Fetches the child-block listing and writes it to `path`, replacing
/// any previous snapshot in full.
pub async fn snapshot(
    repo: &dyn NotionRepository,
    page_id: &PageId,
    path: &Path,
) -> Result<(), AppError> {
    let listing = repo.list_children(page_id).await?;
    let rendered = serde_json::to_string_pretty(&listing)?;
    fs::write(path, rendered)?;
    Ok(())
}
