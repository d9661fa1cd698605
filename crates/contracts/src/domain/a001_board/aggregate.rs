use crate::domain::common::entity_id::deserialize_id;
use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Образовательная доска (CBSE, ICSE, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity for Board {
    fn endpoint() -> &'static str {
        "/boards"
    }

    fn plural_key() -> &'static str {
        "boards"
    }

    fn singular_key() -> &'static str {
        "board"
    }

    fn element_name() -> &'static str {
        "Board"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
