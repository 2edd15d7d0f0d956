// src/api/client.rs
//! Pure HTTP client wrapper for the Notion API.
//!
//! A thin wrapper around reqwest that handles authentication and basic
//! request/response operations. Responses are surfaced as opaque JSON
//! documents; the steps that consume them decide how much structure to
//! read into them.

use crate::api::payloads::{AppendChildren, CreateRow, DatabaseParent, ParagraphBlock, RowProperties};
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::{AppError, NotionErrorCode};
use crate::types::{ApiKey, DatabaseId, PageId};
use reqwest::{header, Client, Response};
use serde::Serialize;
use serde_json::Value;

const NOTION_VERSION: &str = "2022-06-28";
const API_BASE_URL: &str = "https://api.notion.com/v1";

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint.
    async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }

    /// Makes a PATCH request with JSON body to the specified endpoint.
    async fn patch<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("PATCH {}", url);
        Ok(self.client.patch(url).json(body).send().await?)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn retrieve_page(&self, id: &PageId) -> Result<Value, AppError> {
        let endpoint = format!("pages/{}", id.to_hyphenated());
        let response = self.get(&endpoint).await?;
        read_api_response(response).await
    }

    async fn list_children(&self, id: &PageId) -> Result<Value, AppError> {
        let endpoint = format!(
            "blocks/{}/children?page_size={}",
            id.to_hyphenated(),
            NOTION_API_PAGE_SIZE
        );
        let response = self.get(&endpoint).await?;
        read_api_response(response).await
    }

    async fn append_blocks(
        &self,
        id: &PageId,
        blocks: Vec<ParagraphBlock>,
    ) -> Result<(), AppError> {
        let endpoint = format!("blocks/{}/children", id.to_hyphenated());
        let body = AppendChildren { children: blocks };
        let response = self.patch(&endpoint, &body).await?;
        read_api_response(response).await?;
        Ok(())
    }

    async fn create_row(
        &self,
        database: &DatabaseId,
        properties: RowProperties,
    ) -> Result<(), AppError> {
        let body = CreateRow {
            parent: DatabaseParent {
                database_id: database.to_hyphenated(),
            },
            properties,
        };
        let response = self.post("pages", &body).await?;
        read_api_response(response).await?;
        Ok(())
    }
}

/// Reads a Notion API response body, mapping error statuses onto the
/// typed error vocabulary.
async fn read_api_response(response: Response) -> Result<Value, AppError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        return serde_json::from_str(&body)
            .map_err(|e| AppError::MalformedResponse(format!("{} (body: {})", e, preview(&body))));
    }

    // Error bodies carry {"code": ..., "message": ...}; fall back to the
    // bare HTTP status when the body is unparseable.
    let parsed: Option<Value> = serde_json::from_str(&body).ok();
    let code = parsed
        .as_ref()
        .and_then(|v| v.get("code"))
        .and_then(Value::as_str)
        .map(NotionErrorCode::from_api_response)
        .unwrap_or_else(|| NotionErrorCode::from_http_status(status.as_u16()));
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| preview(&body));

    Err(AppError::NotionService {
        code,
        message,
        status,
    })
}

/// Truncates a response body for inclusion in error messages.
fn preview(body: &str) -> String {
    const PREVIEW_LENGTH: usize = 200;
    if body.chars().count() > PREVIEW_LENGTH {
        let cut: String = body.chars().take(PREVIEW_LENGTH).collect();
        format!("{}…", cut)
    } else {
        body.to_string()
    }
}
