use crate::shared::form::{FormSchema, RequiredField};

pub const NAME: &str = "name";
pub const DESCRIPTION: &str = "description";

pub const FORM: FormSchema = FormSchema {
    endpoint: "/boards",
    required_fields: &[RequiredField::new(NAME, "Name")],
    required_files: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{validate, FileSlots, FormFields};
    use contracts::domain::a001_board::aggregate::Board;
    use contracts::domain::common::Entity;

    #[test]
    fn test_form_posts_to_collection() {
        assert_eq!(FORM.endpoint, Board::endpoint());
    }

    #[test]
    fn test_description_is_optional() {
        let fields = FormFields::new().with(NAME, "CBSE");
        assert!(validate(&FORM, &fields, &FileSlots::new()).is_ok());

        let errors = validate(&FORM, &FormFields::new().with(DESCRIPTION, "x"), &FileSlots::new())
            .unwrap_err();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec![NAME]);
    }
}
