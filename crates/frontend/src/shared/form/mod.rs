//! Form submission controller
//!
//! Validates required fields locally, assembles one multipart payload and
//! issues exactly one request. Never retries.

mod fields;
mod preview;
mod submit;
mod view_model;

pub use fields::{FieldErrors, FileSlots, FormFields, PublishFlags};
pub use preview::{BrowserObjectUrls, FilePreview, ObjectUrls};
pub use submit::{submit, validate, FormSchema, RequiredField, SubmitError, STATUS_FIELD};
pub use view_model::FormViewModel;
