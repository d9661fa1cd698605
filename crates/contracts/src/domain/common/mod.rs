//! Общие типы и трейты для всех сущностей каталога

pub mod entity;
pub mod entity_id;

// Реэкспорт
pub use entity::Entity;
pub use entity_id::{EntityId, IdParseError};
