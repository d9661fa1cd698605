use crate::shared::form::{FormSchema, RequiredField};

pub const NAME: &str = "name";
pub const BOARD_ID: &str = "board_id";
pub const DESCRIPTION: &str = "description";

pub const FORM: FormSchema = FormSchema {
    endpoint: "/programs",
    required_fields: &[
        RequiredField::new(NAME, "Name"),
        RequiredField::new(BOARD_ID, "Board"),
    ],
    required_files: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{validate, FileSlots, FormFields};
    use contracts::domain::a002_program::aggregate::Program;
    use contracts::domain::common::Entity;

    #[test]
    fn test_form_posts_to_collection() {
        assert_eq!(FORM.endpoint, Program::endpoint());
    }

    #[test]
    fn test_board_is_required() {
        let fields = FormFields::new().with(NAME, "Science");
        let errors = validate(&FORM, &fields, &FileSlots::new()).unwrap_err();
        assert_eq!(errors.get(BOARD_ID).map(String::as_str), Some("Board is required"));
    }
}
