use serde::{Deserialize, Serialize};

use super::de::{opt_string_or_number, string_or_number};
use super::{Resource, TableResource};

/// One message row from the chat table.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChatMessage {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub conversation_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Resource for ChatMessage {
    const PLURAL: &'static str = "chats";
    const SINGULAR: &'static str = "Chat";
    const TRIMS_SEARCH: bool = true;

    fn key(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.content.as_deref(),
            self.conversation_id.as_deref(),
            self.sender_id.as_deref(),
        ]
    }
}

impl TableResource for ChatMessage {
    const TABLE: &'static str = "messages";
    const COLUMNS: &'static str = "id,conversation_id,sender_id,content,created_at";
    const ORDER_BY: &'static str = "created_at";
}
