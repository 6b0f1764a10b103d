use std::process;

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command};
use crossterm::{execute, terminal::{disable_raw_mode, LeaveAlternateScreen}};

use admin_console::cli_context::CliContext;
use admin_console::commands::{auth, feedback, overview, records, search};
use admin_console::interactive::run_interactive_mode;
use admin_console::logging::{init_logging, log_error, log_panic_info};
use admin_console::models::{FeedbackStatus, ResourceKind};

fn list_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("search")
                .long("search")
                .short('s')
                .value_name("TERM")
                .help("Case-insensitive substring match on the searchable fields"),
        )
        .arg(
            Arg::new("saved")
                .long("saved")
                .value_name("NAME")
                .help("Use a saved search term instead of --search")
                .conflicts_with("search"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .short('l')
                .value_name("N")
                .help("Rows to reveal, in steps of 3 (default 3)"),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .help("Reveal every matching row")
                .action(ArgAction::SetTrue)
                .conflicts_with("limit"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_name("FORMAT")
                .value_parser(["simple", "table", "json"])
                .default_value("simple")
                .help("Output format"),
        )
}

fn resource_command(name: &'static str, about: &'static str) -> Command {
    list_args(Command::new(name).about(about)).subcommand(
        Command::new("delete")
            .about("Delete a record by id")
            .arg(Arg::new("id").value_name("ID").required(true).help("Record id")),
    )
}

fn build_cli() -> Command {
    Command::new("admin")
        .about("Admin console for users, teams, chats and feedback")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Configure the database and feedback sheet")
                .arg(
                    Arg::new("database-url")
                        .long("database-url")
                        .value_name("URL")
                        .help("Base URL of the hosted database"),
                )
                .arg(
                    Arg::new("database-key")
                        .long("database-key")
                        .value_name("KEY")
                        .help("API key sent as apikey and bearer token"),
                )
                .arg(
                    Arg::new("sheet-url")
                        .long("sheet-url")
                        .value_name("URL")
                        .help("Spreadsheet API endpoint for feedback"),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the saved configuration")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(resource_command("users", "List, search and delete users"))
        .subcommand(resource_command("teams", "List, search and delete teams"))
        .subcommand(resource_command("chats", "List, search and delete chat messages"))
        .subcommand(
            list_args(Command::new("feedback").about("Triage feedback from the sheet"))
                .subcommand(list_args(Command::new("list").about("List feedback")))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a feedback row by email")
                        .arg(Arg::new("email").value_name("EMAIL").required(true)),
                )
                .subcommand(
                    Command::new("status")
                        .about("Set the status of a feedback row")
                        .arg(Arg::new("email").value_name("EMAIL").required(true))
                        .arg(
                            Arg::new("status")
                                .value_name("STATUS")
                                .required(true)
                                .value_parser(PossibleValuesParser::new(
                                    FeedbackStatus::ALL.map(|s| s.as_str()),
                                )),
                        ),
                ),
        )
        .subcommand(Command::new("overview").about("Show total users, active users and total teams"))
        .subcommand(
            Command::new("search")
                .about("Manage saved search terms")
                .subcommand(
                    Command::new("save")
                        .about("Save a search term")
                        .arg(Arg::new("name").value_name("NAME").required(true))
                        .arg(Arg::new("term").value_name("TERM").required(true)),
                )
                .subcommand(Command::new("list").about("List saved searches"))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a saved search")
                        .arg(Arg::new("name").value_name("NAME").required(true)),
                ),
        )
        .subcommand(
            Command::new("interactive")
                .visible_alias("ui")
                .about("Open the terminal dashboard"),
        )
}

#[tokio::main]
async fn main() {
    let _ = init_logging();

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let matches = build_cli().get_matches();
    let mut ctx = CliContext::load();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => auth::handle_auth(sub_matches, &mut ctx).await,
        Some(("users", sub_matches)) => {
            records::handle_resource(ResourceKind::Users, sub_matches, &mut ctx).await
        }
        Some(("teams", sub_matches)) => {
            records::handle_resource(ResourceKind::Teams, sub_matches, &mut ctx).await
        }
        Some(("chats", sub_matches)) => {
            records::handle_resource(ResourceKind::Chats, sub_matches, &mut ctx).await
        }
        Some(("feedback", sub_matches)) => feedback::handle_feedback(sub_matches, &mut ctx).await,
        Some(("overview", _)) => overview::handle_overview(&mut ctx).await,
        Some(("search", sub_matches)) => search::handle_search(sub_matches),
        Some(("interactive", _)) => run_interactive_mode(&mut ctx).await,
        _ => unreachable!(),
    };

    if let Err(e) = result {
        log_error(&format!("Command failed: {}", e));
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_feedback_status_rejects_unknown_values() {
        let result = build_cli().try_get_matches_from(["admin", "feedback", "status", "a@b.co", "done"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ui_alias_opens_dashboard() {
        let matches = build_cli()
            .try_get_matches_from(["admin", "ui"])
            .expect("alias parses");
        assert_eq!(matches.subcommand_name(), Some("interactive"));
    }
}
