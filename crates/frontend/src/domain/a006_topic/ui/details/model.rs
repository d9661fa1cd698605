use crate::shared::api::ListQuery;
use crate::shared::cascade::{list_fetcher, LevelFetcher};
use crate::shared::form::{FormSchema, RequiredField};
use contracts::domain::a004_subject::aggregate::Subject;
use contracts::domain::a005_chapter::aggregate::Chapter;

pub const NAME: &str = "name";
pub const CHAPTER_ID: &str = "chapter_id";
pub const IMAGE: &str = "image";

pub const FORM: FormSchema = FormSchema {
    endpoint: "/topics",
    required_fields: &[
        RequiredField::new(NAME, "Name"),
        RequiredField::new(CHAPTER_ID, "Chapter"),
    ],
    required_files: &[],
};

pub const CASCADE_LABELS: &[&str] = &["Subject", "Chapter"];

pub fn cascade_fetchers() -> Vec<LevelFetcher> {
    vec![
        list_fetcher::<Subject>(|_| ListQuery::all()),
        list_fetcher::<Chapter>(|subject| ListQuery {
            subject_id: subject,
            ..ListQuery::all()
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_topic::aggregate::Topic;
    use contracts::domain::common::Entity;

    #[test]
    fn test_form_posts_to_collection() {
        assert_eq!(FORM.endpoint, Topic::endpoint());
    }

    #[test]
    fn test_one_fetcher_per_label() {
        assert_eq!(cascade_fetchers().len(), CASCADE_LABELS.len());
    }
}
