use crate::shared::api::ListQuery;
use crate::shared::cascade::{list_fetcher, LevelFetcher};
use crate::shared::form::{FormSchema, RequiredField};
use contracts::domain::a001_board::aggregate::Board;
use contracts::domain::a002_program::aggregate::Program;

pub const NAME: &str = "name";
pub const PROGRAM_ID: &str = "program_id";

pub const FORM: FormSchema = FormSchema {
    endpoint: "/courses",
    required_fields: &[
        RequiredField::new(NAME, "Name"),
        RequiredField::new(PROGRAM_ID, "Program"),
    ],
    required_files: &[],
};

pub const CASCADE_LABELS: &[&str] = &["Board", "Program"];

/// Board → Program
pub fn cascade_fetchers() -> Vec<LevelFetcher> {
    vec![
        list_fetcher::<Board>(|_| ListQuery::all()),
        list_fetcher::<Program>(|board| ListQuery {
            board_id: board,
            ..ListQuery::all()
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_course::aggregate::Course;
    use contracts::domain::common::Entity;

    #[test]
    fn test_form_posts_to_collection() {
        assert_eq!(FORM.endpoint, Course::endpoint());
    }

    #[test]
    fn test_one_fetcher_per_label() {
        assert_eq!(cascade_fetchers().len(), CASCADE_LABELS.len());
    }
}
