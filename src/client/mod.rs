pub mod database;
pub mod sheet;
pub mod store;

pub use database::DatabaseClient;
pub use sheet::SheetClient;
pub use store::{FeedbackStore, RecordStore, StatsSource};

use reqwest::Response;
use serde_json::Value;

use crate::error::{AdminError, AdminResult};

/// Turns a non-2xx response into `AdminError::HttpStatus`, pulling the
/// service's own message out of a JSON error body when there is one.
pub(crate) async fn check_status(response: Response) -> AdminResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(AdminError::HttpStatus {
        status: status.as_u16(),
        message: extract_error_message(&body),
    })
}

/// PostgREST answers `{"message": ...}`, SheetDB `{"error": ...}`.
pub fn extract_error_message(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for field in ["message", "error", "error_description", "msg"] {
            if let Some(Value::String(msg)) = map.get(field) {
                return msg.clone();
            }
        }
    }
    body.trim().to_string()
}
