use crate::domain::common::entity_id::deserialize_id;
use crate::domain::common::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Статус публикации вопроса
///
/// Отсутствие статуса (`None`) допустимо: форма может не выставлять
/// ни черновик, ни публикацию.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Draft,
    Published,
}

impl PublishStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishStatus::Draft => "draft",
            PublishStatus::Published => "published",
        }
    }
}

impl std::fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Вопрос с четырьмя вариантами ответа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: EntityId,
    #[serde(deserialize_with = "deserialize_id")]
    pub topic_id: EntityId,
    pub question: String,
    #[serde(default)]
    pub option_a: Option<String>,
    #[serde(default)]
    pub option_b: Option<String>,
    #[serde(default)]
    pub option_c: Option<String>,
    #[serde(default)]
    pub option_d: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub status: Option<PublishStatus>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Entity for Question {
    fn endpoint() -> &'static str {
        "/questions"
    }

    fn plural_key() -> &'static str {
        "questions"
    }

    fn singular_key() -> &'static str {
        "question"
    }

    fn element_name() -> &'static str {
        "Question"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.question
    }
}
