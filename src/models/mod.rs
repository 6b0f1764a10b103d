pub mod chat;
pub mod de;
pub mod feedback;
pub mod overview;
pub mod team;
pub mod user;

pub use chat::ChatMessage;
pub use feedback::{Feedback, FeedbackStatus};
pub use overview::{OverviewStats, StatCard};
pub use team::Team;
pub use user::User;

use serde::de::DeserializeOwned;

/// A record type shown on one of the list pages.
pub trait Resource: Clone + Send + Sync + DeserializeOwned + 'static {
    /// Lowercase plural used in messages, e.g. "users".
    const PLURAL: &'static str;
    /// Capitalised singular used in messages, e.g. "User".
    const SINGULAR: &'static str;

    /// Identifier used for deletes (database id, or email for feedback).
    fn key(&self) -> &str;

    /// Whether surrounding whitespace in the search term is ignored.
    const TRIMS_SEARCH: bool = false;

    /// Field values the search box is matched against.
    fn searchable_fields(&self) -> Vec<Option<&str>>;

    /// Case-insensitive substring match. An empty term matches everything.
    fn matches(&self, term: &str) -> bool {
        let term = if Self::TRIMS_SEARCH { term.trim() } else { term };
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.searchable_fields()
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

/// A resource stored as a table in the hosted database.
pub trait TableResource: Resource {
    const TABLE: &'static str;
    /// Column projection passed as `select=`.
    const COLUMNS: &'static str;
    /// Recency column, always ordered descending.
    const ORDER_BY: &'static str;
}

/// The four record pages, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Users,
    Teams,
    Chats,
    Feedback,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Users,
        ResourceKind::Teams,
        ResourceKind::Chats,
        ResourceKind::Feedback,
    ];

    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Users => User::PLURAL,
            ResourceKind::Teams => Team::PLURAL,
            ResourceKind::Chats => ChatMessage::PLURAL,
            ResourceKind::Feedback => Feedback::PLURAL,
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            ResourceKind::Users => User::SINGULAR,
            ResourceKind::Teams => Team::SINGULAR,
            ResourceKind::Chats => ChatMessage::SINGULAR,
            ResourceKind::Feedback => Feedback::SINGULAR,
        }
    }

    /// Message rendered in place of table rows when nothing is visible.
    pub fn empty_message(&self) -> String {
        format!("No {} found", self.plural())
    }
}
