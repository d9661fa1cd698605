use crate::shared::api::Attachment;
use contracts::domain::a007_question::aggregate::PublishStatus;
use std::collections::BTreeMap;

/// Field name → message
pub type FieldErrors = BTreeMap<String, String>;

/// Draft / published switches
///
/// Setting one clears the other. Both off is a valid third state: the form is
/// submitted without a status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishFlags {
    draft: bool,
    published: bool,
}

impl PublishFlags {
    /// Raw constructor, for state restored from elsewhere
    pub fn from_raw(draft: bool, published: bool) -> Self {
        Self { draft, published }
    }

    pub fn draft(&self) -> bool {
        self.draft
    }

    pub fn published(&self) -> bool {
        self.published
    }

    pub fn set_draft(&mut self, on: bool) {
        self.draft = on;
        if on {
            self.published = false;
        }
    }

    pub fn set_published(&mut self, on: bool) {
        self.published = on;
        if on {
            self.draft = false;
        }
    }

    pub fn is_conflicting(&self) -> bool {
        self.draft && self.published
    }

    /// `None` when neither flag is set (or both, which validation rejects)
    pub fn status(&self) -> Option<PublishStatus> {
        match (self.draft, self.published) {
            (true, false) => Some(PublishStatus::Draft),
            (false, true) => Some(PublishStatus::Published),
            _ => None,
        }
    }
}

/// Text inputs of a form, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: Vec<(String, String)>,
    pub publish: PublishFlags,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.values.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.values.push((name.to_string(), value)),
        }
    }

    /// Current value, empty string if never set
    pub fn get(&self, name: &str) -> String {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    }

    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).trim().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Selected files, at most one per named slot
///
/// Every `set` with a file gets a fresh revision, so two different files with
/// the same name and size are still told apart.
#[derive(Debug, Clone, Default)]
pub struct FileSlots {
    slots: Vec<(String, u64, Attachment)>,
    next_revision: u64,
}

impl FileSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put or remove (`None`) the file of a slot
    pub fn set(&mut self, slot: &str, attachment: Option<Attachment>) {
        self.slots.retain(|(name, _, _)| name != slot);
        if let Some(attachment) = attachment {
            self.next_revision += 1;
            self.slots
                .push((slot.to_string(), self.next_revision, attachment));
        }
    }

    pub fn get(&self, slot: &str) -> Option<&Attachment> {
        self.slots
            .iter()
            .find(|(name, _, _)| name == slot)
            .map(|(_, _, a)| a)
    }

    /// Identity of the file currently in `slot`
    pub fn revision(&self, slot: &str) -> Option<u64> {
        self.slots
            .iter()
            .find(|(name, _, _)| name == slot)
            .map(|(_, rev, _)| *rev)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Attachment)> {
        self.slots.iter().map(|(n, _, a)| (n.as_str(), a))
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_flags_are_mutually_exclusive() {
        let mut flags = PublishFlags::default();
        assert_eq!(flags.status(), None);

        flags.set_draft(true);
        assert_eq!(flags.status(), Some(PublishStatus::Draft));

        flags.set_published(true);
        assert!(!flags.draft());
        assert_eq!(flags.status(), Some(PublishStatus::Published));

        flags.set_published(false);
        assert_eq!(flags.status(), None);
        assert!(!flags.is_conflicting());
    }

    #[test]
    fn test_fields_keep_order_and_overwrite() {
        let mut fields = FormFields::new().with("name", "Physics").with("title", "x");
        fields.set("name", "Chemistry");

        let pairs: Vec<_> = fields.iter().collect();
        assert_eq!(pairs, vec![("name", "Chemistry"), ("title", "x")]);
        assert!(fields.is_blank("missing"));
    }

    #[test]
    fn test_file_slot_replacement() {
        let mut files = FileSlots::new();
        files.set("image", Some(Attachment::from_bytes("a.png", "image/png", vec![1])));
        files.set("image", Some(Attachment::from_bytes("b.png", "image/png", vec![2])));
        assert_eq!(files.get("image").map(|a| a.file_name.as_str()), Some("b.png"));
        assert_eq!(files.iter().count(), 1);

        files.set("image", None);
        assert!(files.get("image").is_none());
    }

    #[test]
    fn test_same_looking_file_gets_new_revision() {
        let mut files = FileSlots::new();
        files.set("image", Some(Attachment::from_bytes("a.png", "image/png", vec![1, 2])));
        let first = files.revision("image");
        files.set("image", Some(Attachment::from_bytes("a.png", "image/png", vec![3, 4])));
        let second = files.revision("image");

        assert!(first.is_some());
        assert_ne!(first, second);
        assert_eq!(files.get("image").map(|a| a.size), Some(2));

        files.set("image", None);
        assert_eq!(files.revision("image"), None);
        files.clear();
        assert_eq!(files.iter().count(), 0);
    }
}
