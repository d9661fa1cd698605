use crate::shared::api::Attachment;

/// Creates and releases transient object URLs
pub trait ObjectUrls {
    fn create(&self, attachment: &Attachment) -> Option<String>;
    fn revoke(&self, url: &str);
}

/// `URL.createObjectURL` / `URL.revokeObjectURL`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserObjectUrls;

impl ObjectUrls for BrowserObjectUrls {
    fn create(&self, attachment: &Attachment) -> Option<String> {
        let blob = attachment.to_blob().ok()?;
        web_sys::Url::create_object_url_with_blob(&blob).ok()
    }

    fn revoke(&self, url: &str) {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}

/// Preview URL of the file currently in a slot
///
/// The previous URL is released whenever the file is replaced or removed,
/// and on drop.
pub struct FilePreview<U: ObjectUrls = BrowserObjectUrls> {
    urls: U,
    current: Option<String>,
}

impl<U: ObjectUrls> FilePreview<U> {
    pub fn new(urls: U) -> Self {
        Self { urls, current: None }
    }

    pub fn url(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Swap in a preview for `attachment` (or none) and return the new URL
    pub fn replace(&mut self, attachment: Option<&Attachment>) -> Option<String> {
        self.release();
        self.current = attachment.and_then(|a| self.urls.create(a));
        self.current.clone()
    }

    pub fn release(&mut self) {
        if let Some(url) = self.current.take() {
            self.urls.revoke(&url);
        }
    }
}

impl<U: ObjectUrls> Drop for FilePreview<U> {
    fn drop(&mut self) {
        self.release();
    }
}
