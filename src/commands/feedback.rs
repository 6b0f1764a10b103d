use std::sync::Arc;

use clap::ArgMatches;
use colored::*;

use super::records::{handle_delete, handle_list};
use super::{flush_notifications, ListOptions};
use crate::cli_context::CliContext;
use crate::client::FeedbackStore;
use crate::error::{AdminError, AdminResult};
use crate::models::FeedbackStatus;
use crate::views::FeedbackPage;

pub async fn handle_feedback(matches: &ArgMatches, ctx: &mut CliContext) -> AdminResult<()> {
    let store: Arc<dyn FeedbackStore> = ctx.sheet_client()?;
    let page = FeedbackPage::new(store);

    match matches.subcommand() {
        Some(("delete", sub_matches)) => {
            let email = sub_matches
                .get_one::<String>("email")
                .cloned()
                .unwrap_or_default();
            handle_delete(page, &email).await
        }
        Some(("status", sub_matches)) => handle_status(page, sub_matches).await,
        Some(("list", sub_matches)) => {
            let options = ListOptions::from_matches(sub_matches)?;
            handle_list(page, &options).await
        }
        _ => {
            let options = ListOptions::from_matches(matches)?;
            handle_list(page, &options).await
        }
    }
}

async fn handle_status(mut page: FeedbackPage, matches: &ArgMatches) -> AdminResult<()> {
    let email = matches
        .get_one::<String>("email")
        .cloned()
        .unwrap_or_default();
    let status = matches
        .get_one::<String>("status")
        .ok_or_else(|| AdminError::InvalidInput("status is required".to_string()))?
        .parse::<FeedbackStatus>()?;

    page.mount().await;
    flush_notifications(&page.notifications)?;
    page.notifications = Default::default();

    let previous = page.view.find(&email).map(|row| row.status);
    match page.change_status(&email, status).await {
        Ok(()) => {
            flush_notifications(&page.notifications)?;
            if let Some(previous) = previous {
                println!("  {} {} → {}", email.cyan(), previous, status);
            }
            Ok(())
        }
        Err(e @ AdminError::MissingKey(_)) => Err(e),
        Err(_) => {
            if let Some(row) = page.view.find(&email) {
                println!(
                    "{}",
                    format!("Rolled back {} to {}", email, row.status).yellow()
                );
            }
            flush_notifications(&page.notifications)
        }
    }
}
