use super::{FieldErrors, FileSlots, FormFields};
use crate::shared::api::{ApiClient, ApiError, MultipartPayload};
use serde_json::Value;

/// A field (or file slot) that must be filled before submitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    pub name: &'static str,
    pub label: &'static str,
}

impl RequiredField {
    pub const fn new(name: &'static str, label: &'static str) -> Self {
        Self { name, label }
    }
}

/// Static description of one entity form
#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    /// Collection path the form posts to (e.g. "/subjects")
    pub endpoint: &'static str,
    pub required_fields: &'static [RequiredField],
    pub required_files: &'static [RequiredField],
}

/// Key used in `FieldErrors` for the draft/published conflict
pub const STATUS_FIELD: &str = "status";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// Local, field-scoped; nothing was sent
    #[error("Please fill in the required fields")]
    Validation(FieldErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(_) => self.to_string(),
            SubmitError::Api(e) => e.user_message(),
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::Validation(errors) => Some(errors),
            SubmitError::Api(_) => None,
        }
    }
}

/// Check required fields, required files and the publish flags
pub fn validate(schema: &FormSchema, fields: &FormFields, files: &FileSlots) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    for field in schema.required_fields {
        if fields.is_blank(field.name) {
            errors.insert(field.name.to_string(), format!("{} is required", field.label));
        }
    }
    for slot in schema.required_files {
        if files.get(slot.name).is_none() {
            errors.insert(slot.name.to_string(), format!("{} is required", slot.label));
        }
    }
    if fields.publish.is_conflicting() {
        errors.insert(
            STATUS_FIELD.to_string(),
            "Choose either draft or published, not both".to_string(),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn build_payload(fields: &FormFields, files: &FileSlots) -> MultipartPayload {
    let mut payload = fields
        .iter()
        .fold(MultipartPayload::new(), |p, (name, value)| p.text(name, value.trim()));
    if let Some(status) = fields.publish.status() {
        payload = payload.text(STATUS_FIELD, status.as_str());
    }
    files
        .iter()
        .fold(payload, |p, (slot, attachment)| p.file(slot, attachment.clone()))
}

/// Validate, then POST one multipart request to `schema.endpoint`
///
/// Form state is left untouched; the caller decides whether to reset or
/// navigate away on success.
pub async fn submit(
    schema: &FormSchema,
    fields: &FormFields,
    files: &FileSlots,
    api: &ApiClient,
) -> Result<Value, SubmitError> {
    validate(schema, fields, files).map_err(SubmitError::Validation)?;

    let payload = build_payload(fields, files);
    match api.post_multipart(schema.endpoint, payload).await {
        Ok(value) => {
            log::info!("Submitted form to {}", schema.endpoint);
            Ok(value)
        }
        Err(e) => {
            log::error!("Form submission to {} failed: {}", schema.endpoint, e);
            Err(SubmitError::Api(e))
        }
    }
}
