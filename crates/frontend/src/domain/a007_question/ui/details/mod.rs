//! Question Details UI Module
//!
//! - model.rs: form schema, cascade fetchers, answer choices
//! - view_model.rs: form state, Subject → Chapter → Topic cascade
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::QuestionDetails;
pub use view_model::QuestionDetailsViewModel;
