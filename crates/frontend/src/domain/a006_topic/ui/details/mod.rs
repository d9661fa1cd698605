//! Topic Details UI Module
//!
//! Subject → Chapter cascade plus an optional image.

mod model;
mod view;
mod view_model;

pub use view::TopicDetails;
pub use view_model::TopicDetailsViewModel;
