//! Program Details UI Module
//!
//! - model.rs: form schema
//! - view_model.rs: form state, board options, save command
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::ProgramDetails;
pub use view_model::ProgramDetailsViewModel;
