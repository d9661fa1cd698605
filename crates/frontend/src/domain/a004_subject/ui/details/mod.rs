//! Subject Details UI Module
//!
//! The course is picked from a select grouped by program.

mod model;
mod view;
mod view_model;

pub use view::SubjectDetails;
pub use view_model::SubjectDetailsViewModel;
