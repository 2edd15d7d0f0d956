// src/lib.rs
//! notion-favsync library — mirrors the first sidebar favorite of a
//! Notion workspace into a page and a database, backing up existing
//! content first.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`, `NotionErrorCode`
//! - **Configuration** — `CommandLineInput`, `SyncConfig`
//! - **Domain types** — `ApiKey`, `PageId`, `DatabaseId`, `ValidatedUrl`, `FavoriteLink`
//! - **API client** — `NotionRepository`, `NotionHttpClient`, payloads
//! - **Browser automation** — `DomSurface`, `ChromeSession`, the scraper
//! - **Driver** — `pipeline::execute`

pub mod access;
pub mod api;
pub mod backup;
pub mod browser;
pub mod config;
pub mod constants;
pub mod error;
pub mod pipeline;
pub mod readiness;
pub mod sync;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, SyncConfig};

// --- Domain Types ---
pub use crate::types::{ApiKey, DatabaseId, FavoriteLink, PageId, ValidatedUrl};

// --- API Client ---
pub use crate::api::{NotionHttpClient, NotionRepository, ParagraphBlock, RowProperties};

// --- Browser Automation ---
pub use crate::browser::{ChromeSession, DomSurface, ElementQuery, Lookup};
