mod model;
mod view;
mod view_model;

pub use view::BookReferenceDetails;
pub use view_model::BookReferenceDetailsViewModel;
