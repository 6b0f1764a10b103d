use clap::ArgMatches;
use colored::*;

use crate::config::{load_config, save_config};
use crate::error::{AdminError, AdminResult};

/// `admin search save|list|delete`: named search terms reusable through
/// `--saved NAME` on any list command.
pub fn handle_search(matches: &ArgMatches) -> AdminResult<()> {
    match matches.subcommand() {
        Some(("save", sub_matches)) => {
            let name = required(sub_matches, "name")?;
            let term = required(sub_matches, "term")?;
            let mut config = load_config();
            let replaced = config.saved_searches.insert(name.clone(), term.clone()).is_some();
            save_config(&config)?;
            if replaced {
                println!("✅ Updated saved search '{}'", name);
            } else {
                println!("✅ Saved search '{}' → '{}'", name, term);
            }
            Ok(())
        }
        Some(("delete", sub_matches)) => {
            let name = required(sub_matches, "name")?;
            let mut config = load_config();
            if config.saved_searches.remove(&name).is_none() {
                return Err(AdminError::InvalidInput(format!("Saved search '{}' not found", name)));
            }
            save_config(&config)?;
            println!("✅ Deleted saved search '{}'", name);
            Ok(())
        }
        _ => {
            let config = load_config();
            if config.saved_searches.is_empty() {
                println!("{}", "No saved searches".dimmed());
                return Ok(());
            }
            let mut entries: Vec<_> = config.saved_searches.iter().collect();
            entries.sort();
            for (name, term) in entries {
                println!("{:<20} {}", name.bold(), term);
            }
            Ok(())
        }
    }
}

fn required(matches: &ArgMatches, id: &str) -> AdminResult<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .ok_or_else(|| AdminError::InvalidInput(format!("{} is required", id)))
}
