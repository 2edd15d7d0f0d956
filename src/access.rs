// src/access.rs
//! Integration access check — a smoke test of credentials and
//! connectivity against the target page.
//!
//! Diagnostic only. Whatever this step finds, the run proceeds; its
//! outcome lives solely in the log.

use crate::api::NotionRepository;
use crate::types::PageId;
use serde_json::Value;

/// Retrieves the target page and logs whether it carries a title.
pub async fn run(repo: &dyn NotionRepository, page_id: &PageId) {
    match repo.retrieve_page(page_id).await {
        Ok(page) => match page_title(&page) {
            Some(title) => {
                log::info!("Integration access confirmed. Page title: {}", title);
            }
            None => {
                log::warn!("Page {} has no title or the title format is unexpected", page_id);
            }
        },
        Err(err) => log::error!("Failed to access page {}: {}", page_id, err),
    }
}

/// Reads the first title segment out of an opaque page document.
///
/// The expected shape is `properties.title.title[0].text.content`; any
/// deviation, including an empty content string, reads as "no title".
pub fn page_title(page: &Value) -> Option<String> {
    let content = page
        .get("properties")?
        .get("title")?
        .get("title")?
        .get(0)?
        .get("text")?
        .get("content")?
        .as_str()?;

    if content.is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}
