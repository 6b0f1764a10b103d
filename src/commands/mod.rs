pub mod auth;
pub mod feedback;
pub mod overview;
pub mod records;
pub mod search;

use clap::ArgMatches;
use colored::*;

use crate::config::load_config;
use crate::constants::INITIAL_VISIBLE;
use crate::error::{AdminError, AdminResult};
use crate::views::{NotificationCenter, NotificationKind};

/// Prints success/info notices and turns the first error into the
/// command's failure.
pub fn flush_notifications(center: &NotificationCenter) -> AdminResult<()> {
    let mut failure = None;
    for notification in center.all() {
        match notification.kind {
            NotificationKind::Success => println!("✅ {}", notification.message()),
            NotificationKind::Info => println!("{} {}", "ⓘ".blue(), notification.message()),
            NotificationKind::Error => {
                failure.get_or_insert_with(|| notification.message());
            }
        }
    }
    match failure {
        Some(message) => Err(AdminError::OperationFailed(message)),
        None => Ok(()),
    }
}

/// Output options shared by every list command.
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub search: String,
    pub limit: Option<usize>,
    pub format: String,
}

impl ListOptions {
    /// `--saved NAME` wins over `--search`; `--all` wins over `--limit`.
    pub fn from_matches(matches: &ArgMatches) -> AdminResult<Self> {
        let search = match matches.get_one::<String>("saved") {
            Some(name) => load_config()
                .saved_searches
                .get(name)
                .cloned()
                .ok_or_else(|| AdminError::InvalidInput(format!("Saved search '{}' not found", name)))?,
            None => matches.get_one::<String>("search").cloned().unwrap_or_default(),
        };

        let limit = if matches.get_flag("all") {
            None
        } else {
            let raw = matches.get_one::<String>("limit");
            Some(match raw {
                Some(value) => value
                    .parse::<usize>()
                    .map_err(|_| AdminError::InvalidInput(format!("Invalid limit '{}'", value)))?,
                None => INITIAL_VISIBLE,
            })
        };

        let format = matches
            .get_one::<String>("format")
            .cloned()
            .unwrap_or_else(|| "simple".to_string());

        Ok(Self { search, limit, format })
    }
}
