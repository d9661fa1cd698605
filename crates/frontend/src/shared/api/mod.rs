//! HTTP collaborator
//!
//! - error.rs: `ApiError` taxonomy and user-facing messages
//! - transport.rs: `ApiTransport` seam and response interpretation
//! - multipart.rs: multipart payloads and file attachments
//! - gloo.rs: browser transport over gloo-net
//! - client.rs: `ApiClient` binding transport and credentials

mod client;
mod error;
mod gloo;
mod multipart;
mod transport;

pub use client::{ApiClient, ListQuery};
#[cfg(test)]
pub(crate) use client::testing;
pub use error::{ApiError, GENERIC_FAILURE};
pub use gloo::GlooTransport;
pub use multipart::{Attachment, AttachmentSource, MultipartPayload};
pub use transport::{interpret_response, ApiRequest, ApiTransport, Method, RequestBody};
