use colored::*;
use serde::Serialize;

use super::theme::helpers::{badge_color, feedback_status_color};
use super::theme::{SemanticColor, ThemedColorize};
use super::utils::{format_date, truncate};
use crate::models::{ChatMessage, Feedback, OverviewStats, Resource, Team, User};
use crate::views::ListView;

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
}

const fn col(title: &'static str, width: usize) -> Column {
    Column { title, width }
}

/// Row rendering shared by the CLI tables and the dashboard.
pub trait Tabular: Resource + Serialize {
    fn columns() -> &'static [Column];

    /// Plain cell text, one per column.
    fn cells(&self) -> Vec<String>;

    /// Column drawn as a coloured badge, with its colour.
    fn badge(&self) -> Option<(usize, SemanticColor)> {
        None
    }

    /// One-line summary for the simple format.
    fn headline(&self) -> String;
}

impl Tabular for User {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            col("Name", 24),
            col("Status", 10),
            col("Updated", 12),
            col("ID", 36),
        ];
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.full_name.clone().unwrap_or_else(|| "Unnamed".to_string()),
            self.display_status().to_string(),
            format_date(self.updated_at.as_deref()),
            self.id.clone(),
        ]
    }

    fn badge(&self) -> Option<(usize, SemanticColor)> {
        Some((1, badge_color(self.display_status())))
    }

    fn headline(&self) -> String {
        self.full_name.clone().unwrap_or_else(|| "Unnamed".to_string())
    }
}

impl Tabular for Team {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            col("Name", 28),
            col("Status", 10),
            col("Limit", 7),
            col("Created", 12),
            col("ID", 36),
        ];
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone().unwrap_or_else(|| "Unnamed".to_string()),
            self.display_status().to_string(),
            self.member_limit.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string()),
            format_date(self.created_at.as_deref()),
            self.id.clone(),
        ]
    }

    fn badge(&self) -> Option<(usize, SemanticColor)> {
        Some((1, badge_color(self.display_status())))
    }

    fn headline(&self) -> String {
        self.name.clone().unwrap_or_else(|| "Unnamed".to_string())
    }
}

impl Tabular for ChatMessage {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            col("Message", 40),
            col("Conversation", 14),
            col("Sender", 14),
            col("Sent", 12),
            col("ID", 36),
        ];
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.content.clone().unwrap_or_default(),
            self.conversation_id.clone().unwrap_or_else(|| "-".to_string()),
            self.sender_id.clone().unwrap_or_else(|| "-".to_string()),
            format_date(self.created_at.as_deref()),
            self.id.clone(),
        ]
    }

    fn headline(&self) -> String {
        self.content.clone().unwrap_or_default()
    }
}

impl Tabular for Feedback {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            col("User", 18),
            col("Email", 28),
            col("Subject", 40),
            col("Status", 12),
            col("Date", 12),
        ];
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone().unwrap_or_else(|| "Anonymous".to_string()),
            self.email.clone(),
            self.feedback.clone().unwrap_or_default(),
            self.status.to_string(),
            format_date(self.timestamp.as_deref()),
        ]
    }

    fn badge(&self) -> Option<(usize, SemanticColor)> {
        Some((3, feedback_status_color(self.status)))
    }

    fn headline(&self) -> String {
        format!(
            "{} <{}>: {}",
            self.name.as_deref().unwrap_or("Anonymous"),
            self.email,
            self.feedback.as_deref().unwrap_or_default()
        )
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", truncate(text, width), width = width)
}

/// Prints the revealed slice of `view` as `simple`, `table` or `json`.
pub fn print_list<R: Tabular>(view: &ListView<R>, format: &str) {
    let visible = view.visible();

    if format == "json" {
        match serde_json::to_string_pretty(&visible) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: failed to encode {}: {}", R::PLURAL, e),
        }
        return;
    }

    if let Some(message) = view.empty_message() {
        println!("{}", message.dimmed());
        return;
    }

    let columns = R::columns();
    let total_width: usize = columns.iter().map(|c| c.width + 1).sum();

    match format {
        "table" => {
            println!("{}", "─".repeat(total_width).dimmed());
            let header: Vec<String> = columns.iter().map(|c| pad(c.title, c.width)).collect();
            println!("{}", header.join(" ").bold());
            println!("{}", "─".repeat(total_width).dimmed());

            for record in &visible {
                let badge = record.badge();
                let row: Vec<String> = record
                    .cells()
                    .iter()
                    .zip(columns)
                    .enumerate()
                    .map(|(i, (cell, column))| {
                        let text = pad(cell, column.width);
                        match badge {
                            Some((index, color)) if index == i => text.with_theme(color).to_string(),
                            _ => text,
                        }
                    })
                    .collect();
                println!("{}", row.join(" "));
            }
            println!("{}", "─".repeat(total_width).dimmed());
        }
        _ => {
            for record in &visible {
                let badge = record
                    .badge()
                    .and_then(|(index, color)| record.cells().get(index).map(|c| c.with_theme(color)))
                    .map(|b| format!(" [{}]", b))
                    .unwrap_or_default();
                println!(
                    "{} {}{}",
                    "▸".with_theme(SemanticColor::Info),
                    truncate(&record.headline(), 80),
                    badge
                );
                println!("  {}", record.key().with_theme(SemanticColor::Muted));
            }
        }
    }

    let shown = visible.len();
    let matching = view.filtered().len();
    println!(
        "\nShowing {} of {} {}{}",
        shown,
        matching,
        R::PLURAL,
        if view.search().is_empty() {
            String::new()
        } else {
            format!(" matching '{}'", view.search())
        }
    );
    if view.can_load_more() {
        println!(
            "{}",
            format!("{} more; raise --limit to reveal them", view.remaining()).dimmed()
        );
    }
}

pub fn print_overview(stats: &OverviewStats) {
    println!("{}", "Dashboard".bold());
    println!("{}", "─".repeat(32).dimmed());
    for card in stats.cards() {
        let value = if card.value == "Error" {
            card.value.with_theme(SemanticColor::Error)
        } else {
            card.value.with_theme(SemanticColor::Success)
        };
        println!("{:<16} {}", card.title, value.bold());
    }
}
