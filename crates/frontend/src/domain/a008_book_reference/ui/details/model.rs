use crate::shared::form::{FormSchema, RequiredField};

pub const TITLE: &str = "title";
pub const AUTHOR: &str = "author";
pub const SUBJECT_ID: &str = "subject_id";
pub const FILE: &str = "file";

pub const FORM: FormSchema = FormSchema {
    endpoint: "/book-references",
    required_fields: &[
        RequiredField::new(TITLE, "Title"),
        RequiredField::new(SUBJECT_ID, "Subject"),
    ],
    required_files: &[RequiredField::new(FILE, "PDF file")],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::Attachment;
    use crate::shared::form::{validate, FileSlots, FormFields};
    use contracts::domain::a008_book_reference::aggregate::BookReference;
    use contracts::domain::common::Entity;

    #[test]
    fn test_form_posts_to_collection() {
        assert_eq!(FORM.endpoint, BookReference::endpoint());
    }

    #[test]
    fn test_file_is_required() {
        let fields = FormFields::new().with(TITLE, "Concepts of Physics").with(SUBJECT_ID, "100");

        let errors = validate(&FORM, &fields, &FileSlots::new()).unwrap_err();
        assert_eq!(errors.get(FILE).map(String::as_str), Some("PDF file is required"));

        let mut files = FileSlots::new();
        files.set(FILE, Some(Attachment::from_bytes("hcv.pdf", "application/pdf", vec![1, 2, 3])));
        assert!(validate(&FORM, &fields, &files).is_ok());
    }
}
