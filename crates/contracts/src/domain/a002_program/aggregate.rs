use crate::domain::common::entity_id::{deserialize_id, deserialize_optional_id};
use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Программа обучения, корень иерархии Program → Course → Subject → Chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub board_id: Option<EntityId>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity for Program {
    fn endpoint() -> &'static str {
        "/programs"
    }

    fn plural_key() -> &'static str {
        "programs"
    }

    fn singular_key() -> &'static str {
        "program"
    }

    fn element_name() -> &'static str {
        "Program"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
