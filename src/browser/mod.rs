// src/browser/mod.rs
//! Browser automation — extracting the first favorite link from the
//! workspace sidebar.
//!
//! The extraction depends on the live DOM of the workspace page (class
//! names, button text) rather than a stable API, so every lookup is
//! expressed as an explicit found/not-found result. Any miss or command
//! failure degrades the scrape to an empty result; nothing here aborts
//! the run.

pub mod chrome;

use crate::constants::{FAVORITES_RENDER_TIMEOUT, MENU_RENDER_TIMEOUT};
use crate::error::AppError;
use crate::types::{FavoriteLink, ValidatedUrl};
use std::fmt;
use std::time::Duration;

pub use chrome::ChromeSession;

/// Outcome of a single DOM lookup.
///
/// "Element not found" is an expected state of the live page, not an
/// error; this type keeps the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found,
    NotFound,
}

/// A named element query against the workspace page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementQuery {
    Css(&'static str),
    XPath(&'static str),
}

impl fmt::Display for ElementQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(selector) => write!(f, "css `{}`", selector),
            Self::XPath(selector) => write!(f, "xpath `{}`", selector),
        }
    }
}

/// The first favorite entry in the sidebar.
pub const FIRST_FAVORITE: ElementQuery =
    ElementQuery::XPath("(//div[contains(@class, 'sidebar')]//div[contains(@class, 'favorite')])[1]");

/// The "more options" control of the opened favorite.
pub const MORE_OPTIONS: ElementQuery =
    ElementQuery::XPath("//button[contains(@class, 'more-button')]");

/// The "Copy Link" entry of the item menu; its href carries the link.
pub const COPY_LINK: ElementQuery = ElementQuery::XPath("//button[text()='Copy Link']");

/// The DOM operations the scraper needs from a browser session.
///
/// The fantoccini-backed [`ChromeSession`] implements this for real
/// runs; tests drive the scraper with scripted surfaces instead.
#[async_trait::async_trait]
pub trait DomSurface: Send {
    /// Loads `url` in the session.
    async fn navigate(&mut self, url: &ValidatedUrl) -> Result<(), AppError>;

    /// Polls for `query` becoming present, up to `timeout`.
    async fn await_presence(
        &mut self,
        query: &ElementQuery,
        timeout: Duration,
    ) -> Result<Lookup, AppError>;

    /// Clicks the first element matching `query`, if present.
    async fn click(&mut self, query: &ElementQuery) -> Result<Lookup, AppError>;

    /// Reads the link (`href`) attribute of the first element matching
    /// `query`. `Ok(None)` covers both a missing element and a missing
    /// attribute.
    async fn link_target(&mut self, query: &ElementQuery) -> Result<Option<String>, AppError>;

    /// Releases the underlying browser session. Safe to call once per
    /// session; the driver guarantees it runs on every exit path.
    async fn shutdown(&mut self) -> Result<(), AppError>;
}

/// Scrapes the first favorite link from the workspace sidebar.
///
/// Returns a list of zero or one links. Every failure mode — navigation
/// error, element never rendering, a command failing mid-sequence — is
/// logged and collapses to the empty list, indistinguishable by design
/// from "no favorites exist".
pub async fn scrape_first_favorite<S: DomSurface>(
    surface: &mut S,
    url: &ValidatedUrl,
) -> Vec<FavoriteLink> {
    match extract_first_favorite(surface, url).await {
        Ok(Some(link)) => {
            log::info!("Scraped first favorite link: {}", link);
            vec![FavoriteLink::new(link)]
        }
        Ok(None) => {
            log::warn!("No favorite link could be scraped; continuing with an empty set");
            Vec::new()
        }
        Err(err) => {
            log::error!("Failed to scrape the first favorite: {}", err);
            Vec::new()
        }
    }
}

/// The four-stage lookup sequence against the live page.
async fn extract_first_favorite<S: DomSurface>(
    surface: &mut S,
    url: &ValidatedUrl,
) -> Result<Option<String>, AppError> {
    surface.navigate(url).await?;
    log::info!("Navigated to {} for scraping favorites", url);

    if missed(
        surface
            .await_presence(&FIRST_FAVORITE, FAVORITES_RENDER_TIMEOUT)
            .await?,
        &FIRST_FAVORITE,
    ) {
        return Ok(None);
    }
    if missed(surface.click(&FIRST_FAVORITE).await?, &FIRST_FAVORITE) {
        return Ok(None);
    }

    // The item view renders asynchronously after the click; wait for its
    // menu control instead of sleeping a fixed interval.
    if missed(
        surface
            .await_presence(&MORE_OPTIONS, MENU_RENDER_TIMEOUT)
            .await?,
        &MORE_OPTIONS,
    ) {
        return Ok(None);
    }
    if missed(surface.click(&MORE_OPTIONS).await?, &MORE_OPTIONS) {
        return Ok(None);
    }

    if missed(surface.click(&COPY_LINK).await?, &COPY_LINK) {
        return Ok(None);
    }

    Ok(surface.link_target(&COPY_LINK).await?)
}

/// Logs and reports a lookup miss.
fn missed(lookup: Lookup, query: &ElementQuery) -> bool {
    if lookup == Lookup::NotFound {
        log::warn!("Element not found: {}", query);
        true
    } else {
        false
    }
}
