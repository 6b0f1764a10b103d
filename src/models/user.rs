use serde::{Deserialize, Serialize};

use super::de::string_or_number;
use super::{Resource, TableResource};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Status badge text; accounts without a status are shown as active.
    pub fn display_status(&self) -> &str {
        self.status.as_deref().filter(|s| !s.is_empty()).unwrap_or("active")
    }

    pub fn is_active(&self) -> bool {
        self.display_status() == "active"
    }
}

impl Resource for User {
    const PLURAL: &'static str = "users";
    const SINGULAR: &'static str = "User";

    fn key(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<Option<&str>> {
        vec![self.full_name.as_deref(), self.email.as_deref()]
    }
}

impl TableResource for User {
    const TABLE: &'static str = "users";
    // Only id, full_name and updated_at are guaranteed; status and email are
    // picked up when the table has them.
    const COLUMNS: &'static str = "*";
    const ORDER_BY: &'static str = "updated_at";
}
