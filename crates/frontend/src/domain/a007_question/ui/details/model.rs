use crate::shared::api::ListQuery;
use crate::shared::cascade::{list_fetcher, LevelFetcher};
use crate::shared::form::{FormSchema, RequiredField};
use contracts::domain::a004_subject::aggregate::Subject;
use contracts::domain::a005_chapter::aggregate::Chapter;
use contracts::domain::a006_topic::aggregate::Topic;

pub const QUESTION: &str = "question";
pub const OPTION_A: &str = "option_a";
pub const OPTION_B: &str = "option_b";
pub const OPTION_C: &str = "option_c";
pub const OPTION_D: &str = "option_d";
pub const ANSWER: &str = "answer";
pub const TOPIC_ID: &str = "topic_id";
pub const IMAGE: &str = "image";

/// (field, label, answer value)
pub const OPTIONS: [(&str, &str, &str); 4] = [
    (OPTION_A, "Option A", "A"),
    (OPTION_B, "Option B", "B"),
    (OPTION_C, "Option C", "C"),
    (OPTION_D, "Option D", "D"),
];

pub const FORM: FormSchema = FormSchema {
    endpoint: "/questions",
    required_fields: &[
        RequiredField::new(QUESTION, "Question"),
        RequiredField::new(ANSWER, "Correct answer"),
        RequiredField::new(TOPIC_ID, "Topic"),
    ],
    required_files: &[],
};

pub const CASCADE_LABELS: &[&str] = &["Subject", "Chapter", "Topic"];

/// Subject → Chapter → Topic
pub fn cascade_fetchers() -> Vec<LevelFetcher> {
    vec![
        list_fetcher::<Subject>(|_| ListQuery::all()),
        list_fetcher::<Chapter>(|subject| ListQuery {
            subject_id: subject,
            ..ListQuery::all()
        }),
        list_fetcher::<Topic>(|chapter| ListQuery {
            chapter_id: chapter,
            ..ListQuery::all()
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{validate, FileSlots, FormFields, STATUS_FIELD};
    use contracts::domain::a007_question::aggregate::Question;
    use contracts::domain::common::Entity;

    fn filled() -> FormFields {
        FormFields::new()
            .with(QUESTION, "2 + 2 = ?")
            .with(OPTION_A, "4")
            .with(ANSWER, "A")
            .with(TOPIC_ID, "7")
    }

    #[test]
    fn test_form_posts_to_collection() {
        assert_eq!(FORM.endpoint, Question::endpoint());
    }

    #[test]
    fn test_no_status_is_valid() {
        assert!(validate(&FORM, &filled(), &FileSlots::new()).is_ok());
    }

    #[test]
    fn test_conflicting_flags_are_rejected() {
        let mut fields = filled();
        fields.publish = crate::shared::form::PublishFlags::from_raw(true, true);

        let errors = validate(&FORM, &fields, &FileSlots::new()).unwrap_err();

        assert!(errors.contains_key(STATUS_FIELD));
    }

    #[test]
    fn test_topic_is_required() {
        let mut fields = filled();
        fields.set(TOPIC_ID, "");
        let errors = validate(&FORM, &fields, &FileSlots::new()).unwrap_err();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec![TOPIC_ID]);
    }

    #[test]
    fn test_three_levels() {
        assert_eq!(cascade_fetchers().len(), CASCADE_LABELS.len());
    }
}
