// src/browser/chrome.rs
//! Chromedriver process management and the fantoccini-backed DOM
//! surface.
//!
//! The session owns both the spawned chromedriver child and the
//! WebDriver client. `kill_on_drop` backs up the explicit shutdown so a
//! panic cannot orphan the driver process.

use crate::browser::{DomSurface, ElementQuery, Lookup};
use crate::constants::{READINESS_POLL_INTERVAL, WEBDRIVER_PORT, WEBDRIVER_STARTUP_TIMEOUT};
use crate::error::AppError;
use crate::readiness::poll_until;
use crate::types::ValidatedUrl;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::{Child, Command};
use webdriver::capabilities::Capabilities;

/// A headless Chrome session driven through a locally spawned
/// chromedriver.
pub struct ChromeSession {
    driver: Child,
    client: Option<Client>,
}

impl ChromeSession {
    /// Spawns chromedriver from `driver_path` and establishes a
    /// WebDriver session against it.
    ///
    /// Launch failure is fatal to the whole run: the spawn error and the
    /// session-establishment deadline both surface as
    /// [`AppError::BrowserLaunch`].
    pub async fn launch(driver_path: &Path, headless: bool) -> Result<Self, AppError> {
        log::info!(
            "Launching chromedriver from {} on port {}",
            driver_path.display(),
            WEBDRIVER_PORT
        );

        let mut driver = Command::new(driver_path)
            .arg(format!("--port={}", WEBDRIVER_PORT))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                AppError::BrowserLaunch(format!(
                    "failed to spawn chromedriver at {}: {}",
                    driver_path.display(),
                    e
                ))
            })?;

        let caps = chrome_capabilities(headless);
        let webdriver_url = format!("http://localhost:{}", WEBDRIVER_PORT);

        // Chromedriver needs a moment to start listening; probe for a
        // session instead of sleeping a fixed interval.
        let client = poll_until(
            || {
                let caps = caps.clone();
                let webdriver_url = webdriver_url.clone();
                async move {
                    ClientBuilder::native()
                        .capabilities(caps)
                        .connect(&webdriver_url)
                        .await
                        .ok()
                }
            },
            WEBDRIVER_STARTUP_TIMEOUT,
            READINESS_POLL_INTERVAL,
        )
        .await;

        match client {
            Some(client) => {
                log::info!("WebDriver session established");
                Ok(Self {
                    driver,
                    client: Some(client),
                })
            }
            None => {
                let _ = driver.start_kill();
                Err(AppError::BrowserLaunch(format!(
                    "no WebDriver session within {:?} at {}",
                    WEBDRIVER_STARTUP_TIMEOUT, webdriver_url
                )))
            }
        }
    }

    fn client(&self) -> Result<&Client, AppError> {
        self.client.as_ref().ok_or(AppError::SessionClosed)
    }
}

/// Chrome launch arguments for restricted/containerized hosts, plus
/// headless flags when no window is wanted.
fn chrome_capabilities(headless: bool) -> Capabilities {
    let mut args = vec!["--no-sandbox", "--disable-dev-shm-usage"];
    if headless {
        args.push("--headless");
        args.push("--disable-gpu");
    }

    let mut caps = Capabilities::new();
    caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
    caps
}

fn locator(query: &ElementQuery) -> Locator<'static> {
    match *query {
        ElementQuery::Css(selector) => Locator::Css(selector),
        ElementQuery::XPath(selector) => Locator::XPath(selector),
    }
}

/// Distinguishes "the element is not there" from a failed command.
fn find_outcome<T>(result: Result<T, CmdError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(element) => Ok(Some(element)),
        Err(err) if err.is_no_such_element() => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[async_trait::async_trait]
impl DomSurface for ChromeSession {
    async fn navigate(&mut self, url: &ValidatedUrl) -> Result<(), AppError> {
        self.client()?.goto(url.as_str()).await?;
        Ok(())
    }

    async fn await_presence(
        &mut self,
        query: &ElementQuery,
        timeout: Duration,
    ) -> Result<Lookup, AppError> {
        let client = self.client()?.clone();
        let target = locator(query);

        let outcome = poll_until(
            || {
                let client = client.clone();
                async move {
                    match find_outcome(client.find(target).await) {
                        Ok(Some(_)) => Some(Ok(())),
                        Ok(None) => None,
                        Err(err) => Some(Err(err)),
                    }
                }
            },
            timeout,
            READINESS_POLL_INTERVAL,
        )
        .await;

        match outcome {
            Some(Ok(())) => Ok(Lookup::Found),
            Some(Err(err)) => Err(err),
            None => Ok(Lookup::NotFound),
        }
    }

    async fn click(&mut self, query: &ElementQuery) -> Result<Lookup, AppError> {
        let found = find_outcome(self.client()?.find(locator(query)).await)?;
        match found {
            Some(element) => {
                element.click().await?;
                Ok(Lookup::Found)
            }
            None => Ok(Lookup::NotFound),
        }
    }

    async fn link_target(&mut self, query: &ElementQuery) -> Result<Option<String>, AppError> {
        let found = find_outcome(self.client()?.find(locator(query)).await)?;
        match found {
            Some(element) => Ok(element.attr("href").await?),
            None => Ok(None),
        }
    }

    async fn shutdown(&mut self) -> Result<(), AppError> {
        let close_result = match self.client.take() {
            Some(client) => client.close().await.map_err(AppError::from),
            None => Ok(()),
        };

        // The driver process is killed whether or not the session closed
        // cleanly; a dangling chromedriver outlives the run otherwise.
        if let Err(err) = self.driver.start_kill() {
            log::debug!("chromedriver already exited: {}", err);
        }
        let _ = self.driver.wait().await;

        close_result
    }
}
