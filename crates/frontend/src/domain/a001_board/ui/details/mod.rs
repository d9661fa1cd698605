//! Board Details UI Module
//!
//! MVVM:
//! - model.rs: form schema
//! - view_model.rs: state and save command
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::BoardDetails;
pub use view_model::BoardDetailsViewModel;
