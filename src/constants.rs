// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story of
//! how the run operates: where the backup lands, how long the browser
//! gets to come up, how long the workspace UI gets to settle.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many child blocks a single listing request asks for.
///
/// The Notion API maximum is 100. The backup is a verbatim snapshot of
/// one listing response, so we ask for as much as one response can hold.
pub const NOTION_API_PAGE_SIZE: usize = 100;

// ---------------------------------------------------------------------------
// Local artifacts
// ---------------------------------------------------------------------------

/// Where the pre-sync snapshot of the page's child blocks is written.
/// Overwritten on every run; never read back by this program.
pub const BACKUP_FILE_NAME: &str = "backup_page_content.json";

/// Log file name, created under the system temp directory.
pub const LOG_FILE_NAME: &str = "notion_favsync.log";

// ---------------------------------------------------------------------------
// Browser session boundaries
// ---------------------------------------------------------------------------

/// Port the spawned chromedriver listens on (its default).
pub const WEBDRIVER_PORT: u16 = 9515;

/// How long chromedriver gets to accept a WebDriver session after spawn.
pub const WEBDRIVER_STARTUP_TIMEOUT: Duration = Duration::from_secs(15);

/// Interval between readiness probes while waiting on the driver or the DOM.
pub const READINESS_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// How long the sidebar favorites get to render after navigation.
pub const FAVORITES_RENDER_TIMEOUT: Duration = Duration::from_secs(10);

/// How long the item menu gets to appear after clicking a favorite.
pub const MENU_RENDER_TIMEOUT: Duration = Duration::from_secs(5);
