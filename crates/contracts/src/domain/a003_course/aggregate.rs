use crate::domain::common::entity_id::{deserialize_id, deserialize_optional_id};
use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Курс; принадлежит не более чем одной программе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub program_id: Option<EntityId>,
}

impl Entity for Course {
    fn endpoint() -> &'static str {
        "/courses"
    }

    fn plural_key() -> &'static str {
        "courses"
    }

    fn singular_key() -> &'static str {
        "course"
    }

    fn element_name() -> &'static str {
        "Course"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
