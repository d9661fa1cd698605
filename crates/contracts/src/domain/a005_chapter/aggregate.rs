use crate::domain::common::entity_id::deserialize_id;
use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Глава предмета
///
/// `subject_id` обязателен, но может ссылаться на отсутствующий предмет,
/// если данные на сервере рассогласованы.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    #[serde(deserialize_with = "deserialize_id")]
    pub subject_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl Entity for Chapter {
    fn endpoint() -> &'static str {
        "/chapters"
    }

    fn plural_key() -> &'static str {
        "chapters"
    }

    fn singular_key() -> &'static str {
        "chapter"
    }

    fn element_name() -> &'static str {
        "Chapter"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
