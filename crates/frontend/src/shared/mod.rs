pub mod api;
pub mod api_utils;
pub mod cascade;
pub mod components;
pub mod date_utils;
pub mod form;
pub mod hierarchy;
pub mod icons;
pub mod list_utils;
pub mod lookup_cache;
pub mod page_frame;
pub mod page_standard;
