use crate::shared::form::{FormSchema, RequiredField};

pub const NAME: &str = "name";
pub const TITLE: &str = "title";
pub const SHORT_DES: &str = "short_des";
pub const COURSE_ID: &str = "course_id";
pub const THUMBNAIL: &str = "thumbnail";

pub const FORM: FormSchema = FormSchema {
    endpoint: "/subjects",
    required_fields: &[RequiredField::new(NAME, "Name")],
    required_files: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{validate, FileSlots, FormFields};
    use contracts::domain::a004_subject::aggregate::Subject;
    use contracts::domain::common::Entity;

    #[test]
    fn test_form_posts_to_collection() {
        assert_eq!(FORM.endpoint, Subject::endpoint());
    }

    #[test]
    fn test_course_is_optional() {
        let fields = FormFields::new().with(NAME, "Mechanics");
        assert!(validate(&FORM, &fields, &FileSlots::new()).is_ok());
    }
}
