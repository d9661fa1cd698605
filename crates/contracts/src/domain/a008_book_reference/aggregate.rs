use crate::domain::common::entity_id::{deserialize_id, deserialize_optional_id};
use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Ссылка на учебник (PDF-файл, привязанный к предмету)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookReference {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub subject_id: Option<EntityId>,
    #[serde(default)]
    pub file_url: Option<String>,
}

impl Entity for BookReference {
    fn endpoint() -> &'static str {
        "/book-references"
    }

    fn plural_key() -> &'static str {
        "bookReferences"
    }

    fn singular_key() -> &'static str {
        "bookReference"
    }

    fn element_name() -> &'static str {
        "Book reference"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}
