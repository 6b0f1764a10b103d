use serde::{Deserialize, Serialize};

use super::de::string_or_number;
use super::{Resource, TableResource};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_recruiting: bool,
    #[serde(default)]
    pub member_limit: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Team {
    pub fn display_status(&self) -> &'static str {
        if self.is_recruiting { "active" } else { "inactive" }
    }
}

impl Resource for Team {
    const PLURAL: &'static str = "teams";
    const SINGULAR: &'static str = "Team";

    fn key(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<Option<&str>> {
        vec![self.name.as_deref()]
    }
}

impl TableResource for Team {
    const TABLE: &'static str = "teams";
    const COLUMNS: &'static str = "id,name,is_recruiting,member_limit,created_at";
    const ORDER_BY: &'static str = "created_at";
}
