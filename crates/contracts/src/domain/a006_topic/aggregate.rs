use crate::domain::common::entity_id::deserialize_id;
use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Тема внутри главы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    #[serde(deserialize_with = "deserialize_id")]
    pub chapter_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Entity for Topic {
    fn endpoint() -> &'static str {
        "/topics"
    }

    fn plural_key() -> &'static str {
        "topics"
    }

    fn singular_key() -> &'static str {
        "topic"
    }

    fn element_name() -> &'static str {
        "Topic"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
