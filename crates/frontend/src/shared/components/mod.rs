pub mod cascade_select;
pub mod entity_list;
pub mod file_field;
pub mod form_field;
pub mod grouped_select;
pub mod notification;
pub mod pagination_controls;
pub mod stat_card;
