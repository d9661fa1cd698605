use crate::shared::form::{FormSchema, RequiredField};

pub const NAME: &str = "name";
pub const TITLE: &str = "title";
pub const SUBJECT_ID: &str = "subject_id";

pub const FORM: FormSchema = FormSchema {
    endpoint: "/chapters",
    required_fields: &[
        RequiredField::new(NAME, "Name"),
        RequiredField::new(SUBJECT_ID, "Subject"),
    ],
    required_files: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::hierarchy::{SelectOption, NO_COURSE, NO_PROGRAM};
    use crate::shared::lookup_cache::LookupCache;
    use contracts::domain::a004_subject::aggregate::Subject;
    use contracts::domain::a005_chapter::aggregate::Chapter;
    use contracts::domain::common::Entity;

    #[test]
    fn test_form_posts_to_collection() {
        assert_eq!(FORM.endpoint, Chapter::endpoint());
    }

    #[test]
    fn test_orphan_subject_is_still_selectable() {
        let cache = LookupCache {
            subjects: vec![Subject {
                id: 100,
                name: "Mechanics".into(),
                title: None,
                short_des: None,
                course_id: None,
                thumbnail: None,
            }],
            ..LookupCache::default()
        };

        let groups = cache.subject_options();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, format!("{} / {}", NO_PROGRAM, NO_COURSE));
        assert_eq!(groups[0].options, vec![SelectOption::new(100, "Mechanics")]);
    }
}
