use colored::{Color, Colorize};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Semantic color definitions for consistent theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // Feedback triage
    StatusUnread,
    StatusInProgress,
    StatusResolved,

    // Account / team badges
    BadgeActive,
    BadgeInactive,

    // Entity colors
    Identifier,
    Person,
    Team,

    // UI colors
    Header,
    Border,
    Error,
    Warning,
    Success,
    Info,

    // Text colors
    Primary,
    Muted,
}

/// Theme configuration for the CLI
#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: HashMap<SemanticColor, Color>,
}

impl Default for ColorTheme {
    fn default() -> Self {
        let mut colors = HashMap::new();

        colors.insert(SemanticColor::StatusUnread, Color::Red);
        colors.insert(SemanticColor::StatusInProgress, Color::Yellow);
        colors.insert(SemanticColor::StatusResolved, Color::Green);

        colors.insert(SemanticColor::BadgeActive, Color::Green);
        colors.insert(SemanticColor::BadgeInactive, Color::Red);

        colors.insert(SemanticColor::Identifier, Color::Blue);
        colors.insert(SemanticColor::Person, Color::Green);
        colors.insert(SemanticColor::Team, Color::Cyan);

        colors.insert(SemanticColor::Header, Color::TrueColor { r: 52, g: 58, b: 64 });
        colors.insert(SemanticColor::Border, Color::TrueColor { r: 120, g: 120, b: 120 });
        colors.insert(SemanticColor::Error, Color::Red);
        colors.insert(SemanticColor::Warning, Color::Yellow);
        colors.insert(SemanticColor::Success, Color::Green);
        colors.insert(SemanticColor::Info, Color::Blue);

        colors.insert(SemanticColor::Primary, Color::White);
        colors.insert(SemanticColor::Muted, Color::TrueColor { r: 90, g: 90, b: 90 });

        Self { colors }
    }
}

impl ColorTheme {
    /// Get a color for a semantic meaning
    pub fn get(&self, semantic: SemanticColor) -> Color {
        self.colors.get(&semantic).copied().unwrap_or(Color::White)
    }

    /// Set a color for a semantic meaning
    pub fn set(&mut self, semantic: SemanticColor, color: Color) {
        self.colors.insert(semantic, color);
    }
}

lazy_static! {
    /// Global theme instance
    static ref THEME: ColorTheme = ColorTheme::default();
}

/// Get a color from the current theme
pub fn theme_color(semantic: SemanticColor) -> Color {
    THEME.get(semantic)
}

/// Extension trait for colorizing strings with semantic colors
pub trait ThemedColorize {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString;
}

impl ThemedColorize for &str {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

impl ThemedColorize for String {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

/// Helper functions for common color applications
pub mod helpers {
    use super::*;
    use crate::models::FeedbackStatus;

    pub fn feedback_status_color(status: FeedbackStatus) -> SemanticColor {
        match status {
            FeedbackStatus::Unread => SemanticColor::StatusUnread,
            FeedbackStatus::InProgress => SemanticColor::StatusInProgress,
            FeedbackStatus::Resolved => SemanticColor::StatusResolved,
        }
    }

    /// Badge color for user and team status text.
    pub fn badge_color(status: &str) -> SemanticColor {
        match status.to_lowercase().as_str() {
            "active" => SemanticColor::BadgeActive,
            _ => SemanticColor::BadgeInactive,
        }
    }
}
