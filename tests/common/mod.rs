// tests/common/mod.rs
//! Shared test doubles: a recording Notion repository and a scripted
//! DOM surface.

// Each test binary uses a different subset of these doubles.
#![allow(dead_code)]

use async_trait::async_trait;
use notion_favsync::browser::{COPY_LINK, FIRST_FAVORITE, MORE_OPTIONS};
use notion_favsync::{
    AppError, DatabaseId, DomSurface, ElementQuery, Lookup, NotionRepository, ParagraphBlock,
    RowProperties, SyncConfig, ValidatedUrl,
};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

/// An error that stands in for any remote/transport failure.
pub fn stub_error(context: &str) -> AppError {
    AppError::MalformedResponse(format!("stub failure: {}", context))
}

/// A `NotionRepository` that records every write and serves canned
/// reads. `None` in a read slot simulates a remote failure.
#[derive(Default)]
pub struct RecordingRepository {
    pub page: Option<Value>,
    pub children: Option<Value>,
    pub fail_append: bool,
    pub fail_create: bool,
    pub appended: Mutex<Vec<Vec<ParagraphBlock>>>,
    pub created: Mutex<Vec<(DatabaseId, RowProperties)>>,
}

#[async_trait]
impl NotionRepository for RecordingRepository {
    async fn retrieve_page(
        &self,
        _id: &notion_favsync::PageId,
    ) -> Result<Value, AppError> {
        self.page.clone().ok_or_else(|| stub_error("retrieve_page"))
    }

    async fn list_children(
        &self,
        _id: &notion_favsync::PageId,
    ) -> Result<Value, AppError> {
        self.children
            .clone()
            .ok_or_else(|| stub_error("list_children"))
    }

    async fn append_blocks(
        &self,
        _id: &notion_favsync::PageId,
        blocks: Vec<ParagraphBlock>,
    ) -> Result<(), AppError> {
        self.appended.lock().unwrap().push(blocks);
        if self.fail_append {
            Err(stub_error("append_blocks"))
        } else {
            Ok(())
        }
    }

    async fn create_row(
        &self,
        database: &DatabaseId,
        properties: RowProperties,
    ) -> Result<(), AppError> {
        self.created
            .lock()
            .unwrap()
            .push((database.clone(), properties));
        if self.fail_create {
            Err(stub_error("create_row"))
        } else {
            Ok(())
        }
    }
}

/// What a scripted lookup should do when the scraper reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Found,
    NotFound,
    Fail,
}

impl Script {
    fn resolve(self, context: &str) -> Result<Lookup, AppError> {
        match self {
            Script::Found => Ok(Lookup::Found),
            Script::NotFound => Ok(Lookup::NotFound),
            Script::Fail => Err(stub_error(context)),
        }
    }
}

/// A `DomSurface` that follows a per-element script instead of driving
/// a browser, and counts shutdown calls.
pub struct ScriptedSurface {
    pub navigate: Result<(), ()>,
    pub favorite_presence: Script,
    pub favorite_click: Script,
    pub menu_presence: Script,
    pub menu_click: Script,
    pub copy_click: Script,
    pub href: Result<Option<String>, ()>,
    pub shutdowns: usize,
}

impl Default for ScriptedSurface {
    /// Every lookup succeeds and the final href is the canonical test
    /// link.
    fn default() -> Self {
        Self {
            navigate: Ok(()),
            favorite_presence: Script::Found,
            favorite_click: Script::Found,
            menu_presence: Script::Found,
            menu_click: Script::Found,
            copy_click: Script::Found,
            href: Ok(Some("https://example.com/x".to_string())),
            shutdowns: 0,
        }
    }
}

#[async_trait]
impl DomSurface for ScriptedSurface {
    async fn navigate(&mut self, _url: &ValidatedUrl) -> Result<(), AppError> {
        self.navigate.map_err(|()| stub_error("navigate"))
    }

    async fn await_presence(
        &mut self,
        query: &ElementQuery,
        _timeout: Duration,
    ) -> Result<Lookup, AppError> {
        if *query == FIRST_FAVORITE {
            self.favorite_presence.resolve("favorite presence")
        } else if *query == MORE_OPTIONS {
            self.menu_presence.resolve("menu presence")
        } else {
            panic!("unexpected presence query: {}", query);
        }
    }

    async fn click(&mut self, query: &ElementQuery) -> Result<Lookup, AppError> {
        if *query == FIRST_FAVORITE {
            self.favorite_click.resolve("favorite click")
        } else if *query == MORE_OPTIONS {
            self.menu_click.resolve("menu click")
        } else if *query == COPY_LINK {
            self.copy_click.resolve("copy link click")
        } else {
            panic!("unexpected click query: {}", query);
        }
    }

    async fn link_target(&mut self, query: &ElementQuery) -> Result<Option<String>, AppError> {
        assert_eq!(*query, COPY_LINK, "link read from unexpected element");
        self.href.clone().map_err(|()| stub_error("link_target"))
    }

    async fn shutdown(&mut self) -> Result<(), AppError> {
        self.shutdowns += 1;
        Ok(())
    }
}

/// A fully valid configuration pointed at throwaway identifiers, with
/// the backup routed into the caller's temp directory.
pub fn test_config(backup_path: PathBuf) -> SyncConfig {
    SyncConfig {
        api_key: notion_favsync::ApiKey::new("secret_test_key_123456789").unwrap(),
        page_id: notion_favsync::PageId::parse("550e8400e29b41d4a716446655440000").unwrap(),
        database_id: DatabaseId::parse("0123456789abcdef0123456789abcdef").unwrap(),
        favorites_url: ValidatedUrl::parse("https://www.notion.so/ws/Faves").unwrap(),
        driver_path: PathBuf::from("/usr/bin/chromedriver"),
        backup_path,
        headless: true,
        verbose: false,
    }
}
