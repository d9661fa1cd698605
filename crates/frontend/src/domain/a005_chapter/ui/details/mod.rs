//! Chapter Details UI Module
//!
//! The subject is picked from a select grouped "Program / Course".

mod model;
mod view;
mod view_model;

pub use view::ChapterDetails;
pub use view_model::ChapterDetailsViewModel;
