// src/api/mod.rs
//! Notion API interaction — reading from and writing to a workspace.
//!
//! This module provides a data-oriented interface to the Notion API,
//! with a clear seam between I/O operations and the steps that drive
//! them.

pub mod client;
pub mod payloads;

use crate::error::AppError;
use crate::types::{DatabaseId, PageId};
use serde_json::Value;

/// The ability to read from and write to a Notion workspace.
///
/// This is the fundamental algebra for API interaction. The backup,
/// access-check, and sync steps depend on this trait, never on HTTP
/// details, which is also what makes them testable with recording
/// doubles.
///
/// Read operations return the response document verbatim: the backup
/// step persists it untouched, and the access check reads only the
/// title out of it.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    async fn retrieve_page(&self, id: &PageId) -> Result<Value, AppError>;
    async fn list_children(&self, id: &PageId) -> Result<Value, AppError>;
    async fn append_blocks(
        &self,
        id: &PageId,
        blocks: Vec<payloads::ParagraphBlock>,
    ) -> Result<(), AppError>;
    async fn create_row(
        &self,
        database: &DatabaseId,
        properties: payloads::RowProperties,
    ) -> Result<(), AppError>;
}

// Re-export the public interface
pub use client::NotionHttpClient;
pub use payloads::{ParagraphBlock, RowProperties};
