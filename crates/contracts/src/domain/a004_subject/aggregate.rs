use crate::domain::common::entity_id::{deserialize_id, deserialize_optional_id};
use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Предмет; принадлежит не более чем одному курсу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub short_des: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub course_id: Option<EntityId>,
    /// URL миниатюры, если загружена
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Entity for Subject {
    fn endpoint() -> &'static str {
        "/subjects"
    }

    fn plural_key() -> &'static str {
        "subjects"
    }

    fn singular_key() -> &'static str {
        "subject"
    }

    fn element_name() -> &'static str {
        "Subject"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
