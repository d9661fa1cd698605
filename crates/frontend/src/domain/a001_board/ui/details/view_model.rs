use super::model::FORM;
use crate::shared::form::FormViewModel;
use contracts::domain::a001_board::aggregate::Board;
use std::rc::Rc;

/// ViewModel for Board details form
#[derive(Clone, Copy)]
pub struct BoardDetailsViewModel {
    pub form: FormViewModel,
}

impl BoardDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: FormViewModel::new(FORM),
        }
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(String)>) {
        self.form.save_command::<Board>(on_saved);
    }
}
