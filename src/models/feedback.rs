use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::Resource;
use crate::error::AdminError;
use crate::logging::log_warn;

/// Triage state of a feedback row. The sheet stores it as plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum FeedbackStatus {
    #[default]
    #[serde(rename = "unread")]
    Unread,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "resolved")]
    Resolved,
}

impl FeedbackStatus {
    pub const ALL: [FeedbackStatus; 3] = [
        FeedbackStatus::Unread,
        FeedbackStatus::InProgress,
        FeedbackStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::Unread => "unread",
            FeedbackStatus::InProgress => "in-progress",
            FeedbackStatus::Resolved => "resolved",
        }
    }

    /// Sheet cells are typed by hand, so case is ignored.
    pub fn from_cell(value: &str) -> Option<FeedbackStatus> {
        FeedbackStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackStatus {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedbackStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| AdminError::InvalidInput(format!(
                "Unknown feedback status '{}'. Expected one of: unread, in-progress, resolved",
                s
            )))
    }
}

/// Empty cells mean the row was never triaged. Hand-edited cells that name
/// no known status are read as unread so the row stays on the page.
fn status_or_unread<'de, D>(deserializer: D) -> Result<FeedbackStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let status = match raw.as_deref().map(str::trim) {
        None | Some("") => FeedbackStatus::Unread,
        Some(value) => FeedbackStatus::from_cell(value).unwrap_or_else(|| {
            log_warn(&format!("Unrecognized feedback status '{}', reading it as unread", value));
            FeedbackStatus::Unread
        }),
    };
    Ok(status)
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Feedback {
    /// Row key for the spreadsheet API.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default, deserialize_with = "status_or_unread")]
    pub status: FeedbackStatus,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: Option<String>,
}

impl Resource for Feedback {
    const PLURAL: &'static str = "feedbacks";
    const SINGULAR: &'static str = "Feedback";

    fn key(&self) -> &str {
        &self.email
    }

    fn searchable_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.feedback.as_deref(),
            self.name.as_deref(),
            Some(self.email.as_str()),
        ]
    }
}
