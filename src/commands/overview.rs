use std::sync::Arc;

use crate::cli_context::CliContext;
use crate::client::StatsSource;
use crate::error::AdminResult;
use crate::formatting::print_overview;
use crate::views::OverviewPage;

pub async fn handle_overview(ctx: &mut CliContext) -> AdminResult<()> {
    let source: Arc<dyn StatsSource> = ctx.database_client()?;
    let mut page = OverviewPage::new(source);
    page.refresh().await;
    if let Some(stats) = page.stats() {
        print_overview(stats);
    }
    Ok(())
}
