use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use serde_json::{json, Value};

use super::check_status;
use super::store::{FeedbackStore, RecordStore};
use crate::constants::SHEET_KEY_FIELD;
use crate::error::{AdminError, AdminResult};
use crate::logging::log_debug;
use crate::models::Feedback;

/// Client for the spreadsheet-backed feedback API. Rows are addressed by
/// `{base}/email/{email}`.
pub struct SheetClient {
    client: reqwest::Client,
    base_url: Url,
}

impl SheetClient {
    pub fn new(base_url: &str) -> AdminResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AdminError::ConfigError(format!("Invalid sheet URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AdminError::ConfigError(format!("Invalid sheet URL '{}'", base_url)));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// `{base}/email/{email}` with the email percent-encoded as one segment.
    pub fn row_url(&self, email: &str) -> AdminResult<Url> {
        if email.trim().is_empty() {
            return Err(AdminError::MissingKey("feedback email is empty".to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AdminError::ConfigError("Sheet URL cannot take a path".to_string()))?
            .pop_if_empty()
            .push(SHEET_KEY_FIELD)
            .push(email);
        Ok(url)
    }
}

/// Mutation endpoints answer with a small JSON receipt; anything else
/// counts as a malformed response.
fn ensure_json(body: &str) -> AdminResult<()> {
    if !body.trim().is_empty() {
        serde_json::from_str::<Value>(body)?;
    }
    Ok(())
}

#[async_trait]
impl RecordStore<Feedback> for SheetClient {
    async fn list(&self) -> AdminResult<Vec<Feedback>> {
        log_debug(&format!("GET {}", self.base_url));
        let response = self.client.get(self.base_url.clone()).send().await?;
        let body = check_status(response).await?.text().await?;
        let rows: Option<Vec<Feedback>> = serde_json::from_str(&body)?;
        Ok(rows.unwrap_or_default())
    }

    async fn remove(&self, email: &str) -> AdminResult<()> {
        let url = self.row_url(email)?;
        log_debug(&format!("DELETE {}", url));

        let response = self.client.delete(url).send().await?;
        let body = check_status(response).await?.text().await?;
        ensure_json(&body)
    }
}

#[async_trait]
impl FeedbackStore for SheetClient {
    async fn update_field(&self, email: &str, field: &str, value: &str) -> AdminResult<()> {
        let url = self.row_url(email)?;
        log_debug(&format!("PUT {} {}={}", url, field, value));

        let body = json!({ "data": { field: value } });
        let response = self.client.put(url).json(&body).send().await?;
        let body = check_status(response).await?.text().await?;
        ensure_json(&body)
    }
}
