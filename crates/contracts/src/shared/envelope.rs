//! Разбор конвертов ответа удалённого API
//!
//! Разные эндпоинты возвращают список то под именованным ключом
//! (`{ "subjects": [...] }`), то под `data` (`{ "data": [...] }`).
//! Правило выбора ключа описано здесь один раз, а не в каждом вызове.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Общий ключ-запасной для списков и записей
pub const DATA_KEY: &str = "data";

/// Ответ с ошибкой или флагом успеха
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusEnvelope {
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Сервер явно сообщил о неуспехе (`success: false`)
    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }
}

/// Выбрать массив из ответа: сначала именованный ключ, затем `data`,
/// затем сам ответ, если он уже массив. Иначе `None`.
fn pick_list<'a>(value: &'a Value, plural_key: &str) -> Option<&'a Vec<Value>> {
    value
        .get(plural_key)
        .and_then(Value::as_array)
        .or_else(|| value.get(DATA_KEY).and_then(Value::as_array))
        .or_else(|| value.as_array())
}

/// Извлечь список сущностей из ответа
///
/// Отсутствие обоих ключей даёт пустой список. Ошибка возвращается только
/// если массив найден, но его элементы не соответствуют схеме.
pub fn list_from_envelope<T: DeserializeOwned>(
    value: &Value,
    plural_key: &str,
) -> Result<Vec<T>, String> {
    match pick_list(value, plural_key) {
        Some(items) => items
            .iter()
            .map(|item| serde_json::from_value(item.clone()))
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| format!("Failed to parse '{}' list: {}", plural_key, e)),
        None => Ok(Vec::new()),
    }
}

/// Количество элементов списка в ответе (без разбора элементов)
pub fn count_in_envelope(value: &Value, plural_key: &str) -> usize {
    pick_list(value, plural_key).map(Vec::len).unwrap_or(0)
}

/// Извлечь созданную/обновлённую запись: ключ в единственном числе,
/// затем `data`, затем сам ответ.
pub fn entity_from_envelope<T: DeserializeOwned>(
    value: &Value,
    singular_key: &str,
) -> Result<T, String> {
    let candidate = value
        .get(singular_key)
        .filter(|v| v.is_object())
        .or_else(|| value.get(DATA_KEY).filter(|v| v.is_object()))
        .unwrap_or(value);

    serde_json::from_value(candidate.clone())
        .map_err(|e| format!("Failed to parse '{}': {}", singular_key, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_named_key_is_preferred_over_data() {
        let value = json!({ "subjects": [{"id": 1}], "data": [{"id": 2}, {"id": 3}] });
        let items: Vec<Item> = list_from_envelope(&value, "subjects").unwrap();
        assert_eq!(items, vec![Item { id: 1 }]);
    }

    #[test]
    fn test_falls_back_to_data_key() {
        let value = json!({ "data": [{"id": 2}, {"id": 3}] });
        let items: Vec<Item> = list_from_envelope(&value, "subjects").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(count_in_envelope(&value, "subjects"), 2);
    }

    #[test]
    fn test_missing_keys_give_empty_list() {
        let value = json!({ "message": "ok" });
        let items: Vec<Item> = list_from_envelope(&value, "subjects").unwrap();
        assert!(items.is_empty());
        assert_eq!(count_in_envelope(&value, "subjects"), 0);
    }

    #[test]
    fn test_bare_array_is_accepted() {
        let value = json!([{"id": 5}]);
        let items: Vec<Item> = list_from_envelope(&value, "subjects").unwrap();
        assert_eq!(items, vec![Item { id: 5 }]);
    }

    #[test]
    fn test_malformed_items_are_an_error() {
        let value = json!({ "subjects": [{"name": "no id"}] });
        let result: Result<Vec<Item>, _> = list_from_envelope(&value, "subjects");
        assert!(result.is_err());
    }

    #[test]
    fn test_entity_from_envelope() {
        let named = json!({ "subject": {"id": 9}, "message": "created" });
        assert_eq!(entity_from_envelope::<Item>(&named, "subject").unwrap(), Item { id: 9 });

        let data = json!({ "data": {"id": 10} });
        assert_eq!(entity_from_envelope::<Item>(&data, "subject").unwrap(), Item { id: 10 });

        let bare = json!({ "id": 11 });
        assert_eq!(entity_from_envelope::<Item>(&bare, "subject").unwrap(), Item { id: 11 });
    }

    #[test]
    fn test_status_envelope() {
        let failed = StatusEnvelope::from_value(&json!({ "success": false, "message": "Duplicate name" }));
        assert!(failed.is_failure());
        assert_eq!(failed.message.as_deref(), Some("Duplicate name"));

        let plain = StatusEnvelope::from_value(&json!([1, 2]));
        assert!(!plain.is_failure());
    }
}
