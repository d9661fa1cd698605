use super::ApiError;
use wasm_bindgen::JsValue;

/// Where the bytes of an attachment come from
#[derive(Debug, Clone)]
pub enum AttachmentSource {
    /// File picked by the user in an `<input type="file">`
    Browser(web_sys::File),
    /// In-memory content (generated files, tests)
    Bytes { content_type: String, data: Vec<u8> },
}

/// A single file bound to a named multipart slot
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub size: u64,
    pub source: AttachmentSource,
}

impl Attachment {
    pub fn from_file(file: web_sys::File) -> Self {
        Self {
            file_name: file.name(),
            size: file.size() as u64,
            source: AttachmentSource::Browser(file),
        }
    }

    pub fn from_bytes(file_name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            size: data.len() as u64,
            source: AttachmentSource::Bytes {
                content_type: content_type.into(),
                data,
            },
        }
    }

    /// Convert to a browser `Blob` (a `File` already is one)
    pub fn to_blob(&self) -> Result<web_sys::Blob, ApiError> {
        match &self.source {
            AttachmentSource::Browser(file) => Ok(file.clone().into()),
            AttachmentSource::Bytes { content_type, data } => {
                let bytes = js_sys::Uint8Array::from(data.as_slice());
                let parts = js_sys::Array::of1(&bytes);
                let opts = web_sys::BlobPropertyBag::new();
                opts.set_type(content_type);
                web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
                    .map_err(|e| ApiError::Transport(format!("Failed to build blob: {e:?}")))
            }
        }
    }
}

/// Text fields plus at most one file per named slot
#[derive(Debug, Clone, Default)]
pub struct MultipartPayload {
    pub text: Vec<(String, String)>,
    pub files: Vec<(String, Attachment)>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.text.push((name.into(), value.into()));
        self
    }

    /// Bind a file to a slot, replacing any previous file in the same slot
    pub fn file(mut self, slot: impl Into<String>, attachment: Attachment) -> Self {
        let slot = slot.into();
        self.files.retain(|(name, _)| *name != slot);
        self.files.push((slot, attachment));
        self
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.text
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_file(&self, slot: &str) -> bool {
        self.files.iter().any(|(name, _)| name == slot)
    }

    /// Build browser `FormData` for the request body
    pub fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let to_err = |e: JsValue| ApiError::Transport(format!("Failed to build form data: {e:?}"));
        let form = web_sys::FormData::new().map_err(to_err)?;
        for (name, value) in &self.text {
            form.append_with_str(name, value).map_err(to_err)?;
        }
        for (slot, attachment) in &self.files {
            let blob = attachment.to_blob()?;
            form.append_with_blob_and_filename(slot, &blob, &attachment.file_name)
                .map_err(to_err)?;
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_file_per_slot() {
        let payload = MultipartPayload::new()
            .text("name", "Mechanics")
            .file("image", Attachment::from_bytes("a.png", "image/png", vec![1, 2]))
            .file("image", Attachment::from_bytes("b.png", "image/png", vec![3]));

        assert_eq!(payload.files.len(), 1);
        assert_eq!(payload.files[0].1.file_name, "b.png");
        assert_eq!(payload.files[0].1.size, 1);
        assert_eq!(payload.text_value("name"), Some("Mechanics"));
        assert!(payload.has_file("image"));
        assert!(!payload.has_file("pdf"));
    }
}
