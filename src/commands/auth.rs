use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::client::RecordStore;
use crate::config::{load_config, DatabaseCredentials};
use crate::error::{AdminError, AdminResult};
use crate::formatting::mask_secret;
use crate::logging::get_log_file_path;
use crate::models::{Feedback, User};

pub async fn handle_auth(matches: &ArgMatches, ctx: &mut CliContext) -> AdminResult<()> {
    if matches.get_flag("show") {
        let config = load_config();
        println!("Database URL: {}", config.database_url.as_deref().unwrap_or("(not set)"));
        println!(
            "Database key: {}",
            config.database_key.as_deref().map(mask_secret).unwrap_or_else(|| "(not set)".to_string())
        );
        println!("Sheet URL:    {}", config.sheet_url.as_deref().unwrap_or("(not set)"));
        if let Some(log_path) = get_log_file_path() {
            println!("Log file:     {}", log_path.display());
        }
        return Ok(());
    }

    let url = matches.get_one::<String>("database-url");
    let key = matches.get_one::<String>("database-key");
    let sheet = matches.get_one::<String>("sheet-url");

    if url.is_none() && key.is_none() && sheet.is_none() {
        println!("Usage: admin auth --database-url <URL> --database-key <KEY> [--sheet-url <URL>] or admin auth --show");
        return Ok(());
    }

    match (url, key) {
        (Some(url), Some(key)) => {
            ctx.set_database_credentials(DatabaseCredentials {
                url: url.clone(),
                key: key.clone(),
            })?;
            println!("Database credentials saved successfully!");

            let client = ctx.database_client()?;
            match RecordStore::<User>::list(&*client).await {
                Ok(users) => println!("✅ Connected: {} users visible", users.len()),
                Err(e) => println!("❌ Failed to reach the database: {}", e.user_message()),
            }
        }
        (None, None) => {}
        _ => {
            return Err(AdminError::InvalidInput(
                "--database-url and --database-key must be given together".to_string(),
            ));
        }
    }

    if let Some(sheet) = sheet {
        ctx.set_sheet_url(sheet.clone())?;
        println!("Sheet URL saved successfully!");

        let client = ctx.sheet_client()?;
        match RecordStore::<Feedback>::list(&*client).await {
            Ok(rows) => println!("✅ Connected: {} feedback rows", rows.len()),
            Err(e) => println!("{} Failed to reach the sheet: {}", "❌".red(), e.user_message()),
        }
    }

    Ok(())
}
