//! Course Details UI Module
//!
//! The program is picked through a Board → Program cascade.

mod model;
mod view;
mod view_model;

pub use view::CourseDetails;
pub use view_model::CourseDetailsViewModel;
