use std::sync::Arc;

use clap::ArgMatches;
use colored::*;

use super::{flush_notifications, ListOptions};
use crate::cli_context::CliContext;
use crate::client::RecordStore;
use crate::error::{AdminError, AdminResult};
use crate::formatting::{print_list, Tabular};
use crate::models::{ChatMessage, ResourceKind, Team, User};
use crate::views::ListPage;

/// Dispatches `admin users|teams|chats [delete <ID>]`.
pub async fn handle_resource(kind: ResourceKind, matches: &ArgMatches, ctx: &mut CliContext) -> AdminResult<()> {
    let client = ctx.database_client()?;
    match kind {
        ResourceKind::Users => dispatch::<User>(matches, client).await,
        ResourceKind::Teams => dispatch::<Team>(matches, client).await,
        ResourceKind::Chats => dispatch::<ChatMessage>(matches, client).await,
        ResourceKind::Feedback => Err(AdminError::InvalidInput(
            "feedback is served by the sheet, use 'admin feedback'".to_string(),
        )),
    }
}

async fn dispatch<R: Tabular + 'static>(
    matches: &ArgMatches,
    store: Arc<dyn RecordStore<R>>,
) -> AdminResult<()> {
    match matches.subcommand() {
        Some(("delete", sub_matches)) => {
            let id = sub_matches
                .get_one::<String>("id")
                .cloned()
                .unwrap_or_default();
            handle_delete::<R, _>(ListPage::new(store), &id).await
        }
        _ => {
            let options = ListOptions::from_matches(matches)?;
            handle_list(ListPage::new(store), &options).await
        }
    }
}

/// Fetches the collection, applies the search and reveal limit, and prints it.
pub async fn handle_list<R, S>(mut page: ListPage<R, S>, options: &ListOptions) -> AdminResult<()>
where
    R: Tabular,
    S: RecordStore<R> + ?Sized,
{
    page.mount().await;
    flush_notifications(&page.notifications)?;

    page.view.set_search(options.search.clone());
    page.view.reveal_at_least(options.limit.unwrap_or(usize::MAX));
    print_list(&page.view, &options.format);
    Ok(())
}

/// Deletes by key after confirming the record exists in the fetched list.
/// A key that is not listed is still sent, since the list may be stale.
pub async fn handle_delete<R, S>(mut page: ListPage<R, S>, key: &str) -> AdminResult<()>
where
    R: Tabular,
    S: RecordStore<R> + ?Sized,
{
    page.mount().await;
    flush_notifications(&page.notifications)?;
    page.notifications = Default::default();

    if page.view.find(key).is_none() && !key.trim().is_empty() {
        println!(
            "{}",
            format!("{} '{}' is not in the current list; sending delete anyway", R::SINGULAR, key).yellow()
        );
    }

    // An empty key fails before any request and raises no notification.
    if let Err(e @ AdminError::MissingKey(_)) = page.delete(key).await {
        return Err(e);
    }
    flush_notifications(&page.notifications)?;
    println!("{} {} remaining", page.view.len(), R::PLURAL);
    Ok(())
}
