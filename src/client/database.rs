use async_trait::async_trait;
use chrono::{Duration, SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use super::check_status;
use super::store::{RecordStore, StatsSource};
use crate::config::DatabaseCredentials;
use crate::constants::{ACTIVE_WINDOW_MINUTES, REST_PREFIX};
use crate::error::{AdminError, AdminResult};
use crate::logging::{log_debug, log_error};
use crate::models::{OverviewStats, TableResource, Team, User};

/// Client for the hosted database's REST gateway (PostgREST dialect).
pub struct DatabaseClient {
    client: reqwest::Client,
    base_url: String,
}

impl DatabaseClient {
    pub fn new(credentials: &DatabaseCredentials) -> AdminResult<Self> {
        let invalid_key = |_| AdminError::ConfigError("Invalid database key format".to_string());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("apikey", HeaderValue::from_str(&credentials.key).map_err(invalid_key)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", credentials.key)).map_err(invalid_key)?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: credentials.url.trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}/{}", self.base_url, REST_PREFIX, table)
    }

    /// Fetches every row of `R`'s table, newest first.
    pub async fn select<R: TableResource>(&self) -> AdminResult<Vec<R>> {
        let order = format!("{}.desc", R::ORDER_BY);
        log_debug(&format!("GET {} select={} order={}", R::TABLE, R::COLUMNS, order));

        let response = self
            .client
            .get(self.table_url(R::TABLE))
            .query(&[("select", R::COLUMNS), ("order", order.as_str())])
            .send()
            .await?;

        let body = check_status(response).await?.text().await?;
        let rows: Option<Vec<R>> = serde_json::from_str(&body)?;
        Ok(rows.unwrap_or_default())
    }

    /// Deletes rows whose `id` equals `id`.
    pub async fn delete_by_id(&self, table: &str, id: &str) -> AdminResult<()> {
        if id.trim().is_empty() {
            return Err(AdminError::MissingKey(format!("empty id for delete on '{}'", table)));
        }
        log_debug(&format!("DELETE {} id=eq.{}", table, id));

        let response = self
            .client
            .delete(self.table_url(table))
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    /// Exact row count, optionally narrowed by one `column=op.value` filter.
    pub async fn count(&self, table: &str, filter: Option<(&str, String)>) -> AdminResult<u64> {
        let mut query = vec![("select".to_string(), "*".to_string())];
        if let Some((column, expr)) = filter {
            query.push((column.to_string(), expr));
        }

        let response = self
            .client
            .head(self.table_url(table))
            .query(&query)
            .header("Prefer", "count=exact")
            .send()
            .await?;

        let response = check_status(response).await?;
        let range = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        parse_content_range(&range).ok_or_else(|| AdminError::HttpStatus {
            status: response.status().as_u16(),
            message: format!("Missing row count in Content-Range '{}'", range),
        })
    }
}

/// Reads the total from `0-24/1250` or `*/1250`.
pub fn parse_content_range(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}

#[async_trait]
impl<R: TableResource> RecordStore<R> for DatabaseClient {
    async fn list(&self) -> AdminResult<Vec<R>> {
        self.select::<R>().await
    }

    async fn remove(&self, key: &str) -> AdminResult<()> {
        self.delete_by_id(R::TABLE, key).await
    }
}

#[async_trait]
impl StatsSource for DatabaseClient {
    /// Each count fails independently; a failed one is left as `None`.
    async fn overview(&self) -> OverviewStats {
        let since = (Utc::now() - Duration::minutes(ACTIVE_WINDOW_MINUTES))
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        let (total_users, active_users, total_teams) = tokio::join!(
            self.count(User::TABLE, None),
            self.count(User::TABLE, Some(("last_seen", format!("gte.{}", since)))),
            self.count(Team::TABLE, None),
        );

        let keep = |label: &str, result: AdminResult<u64>| match result {
            Ok(n) => Some(n),
            Err(e) => {
                log_error(&format!("Failed to count {}: {}", label, e));
                None
            }
        };

        OverviewStats {
            total_users: keep("total users", total_users),
            active_users: keep("active users", active_users),
            total_teams: keep("total teams", total_teams),
        }
    }
}
