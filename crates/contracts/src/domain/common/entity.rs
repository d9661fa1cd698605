use super::EntityId;

/// Трейт для сущностей каталога
///
/// Описывает, как сущность называется в REST API: путь коллекции и ключи
/// конверта ответа (`{ "subjects": [...] }` / `{ "subject": {...} }`).
pub trait Entity {
    /// Путь коллекции (например, "/subjects")
    fn endpoint() -> &'static str;

    /// Ключ списка в ответе (например, "subjects")
    fn plural_key() -> &'static str;

    /// Ключ созданной записи в ответе (например, "subject")
    fn singular_key() -> &'static str;

    /// Имя элемента для UI
    fn element_name() -> &'static str;

    /// Получить ID записи
    fn id(&self) -> EntityId;

    /// Наименование для списков и выпадающих списков
    fn display_name(&self) -> &str;
}
