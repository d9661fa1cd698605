use serde::{Deserialize, Deserializer};
use std::fmt;

/// Идентификатор записи удалённого API
///
/// Сервер отдаёт id числом, но старые эндпоинты иногда присылают строку
/// (`"12"`), поэтому десериализация принимает оба варианта.
pub type EntityId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError(pub String);

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid id: {}", self.0)
    }
}

impl std::error::Error for IdParseError {}

/// Разобрать id из значения `<select>` или query-параметра
pub fn parse_id(raw: &str) -> Result<EntityId, IdParseError> {
    raw.trim()
        .parse::<EntityId>()
        .map_err(|_| IdParseError(raw.to_string()))
}

/// Разобрать необязательный id: пустая строка означает "не выбрано"
pub fn parse_optional_id(raw: &str) -> Result<Option<EntityId>, IdParseError> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse_id(raw).map(Some)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Num(i64),
    Str(String),
}

impl RawId {
    fn into_id<E: serde::de::Error>(self) -> Result<EntityId, E> {
        match self {
            RawId::Num(n) => Ok(n),
            RawId::Str(s) => parse_id(&s).map_err(E::custom),
        }
    }
}

/// serde helper: id как число или строка
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<EntityId, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer)?.into_id()
}

/// serde helper: nullable внешний ключ как число, строка или null
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(raw) => raw.into_id().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "deserialize_id")]
        id: EntityId,
        #[serde(default, deserialize_with = "deserialize_optional_id")]
        parent_id: Option<EntityId>,
    }

    #[test]
    fn test_accepts_numeric_and_string_ids() {
        let row: Row = serde_json::from_str(r#"{"id": 7, "parent_id": "12"}"#).unwrap();
        assert_eq!(row.id, 7);
        assert_eq!(row.parent_id, Some(12));

        let row: Row = serde_json::from_str(r#"{"id": "8", "parent_id": null}"#).unwrap();
        assert_eq!(row.id, 8);
        assert_eq!(row.parent_id, None);
    }

    #[test]
    fn test_missing_and_blank_foreign_key_is_none() {
        let row: Row = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(row.parent_id, None);

        let row: Row = serde_json::from_str(r#"{"id": 1, "parent_id": ""}"#).unwrap();
        assert_eq!(row.parent_id, None);
    }

    #[test]
    fn test_parse_optional_id() {
        assert_eq!(parse_optional_id(""), Ok(None));
        assert_eq!(parse_optional_id(" 42 "), Ok(Some(42)));
        assert!(parse_optional_id("abc").is_err());
    }
}
