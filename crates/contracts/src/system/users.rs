use crate::domain::common::entity_id::deserialize_id;
use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Entity for User {
    fn endpoint() -> &'static str {
        "/users"
    }

    fn plural_key() -> &'static str {
        "users"
    }

    fn singular_key() -> &'static str {
        "user"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserStatusDto {
    pub is_active: bool,
}
