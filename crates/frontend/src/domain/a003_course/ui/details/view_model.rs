use super::model::{cascade_fetchers, FORM, PROGRAM_ID};
use crate::shared::cascade::CascadeHandle;
use crate::shared::form::FormViewModel;
use contracts::domain::a003_course::aggregate::Course;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct CourseDetailsViewModel {
    pub form: FormViewModel,
    pub cascade: CascadeHandle,
}

impl CourseDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: FormViewModel::new(FORM),
            cascade: CascadeHandle::new(cascade_fetchers()),
        }
    }

    /// Load boards and keep `program_id` in step with the deepest level
    pub fn start(&self) {
        self.cascade.start();
        let vm = *self;
        Effect::new(move |_| {
            let program = vm.cascade.selected(1);
            vm.form.set_id(PROGRAM_ID, program);
        });
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(String)>) {
        self.form.save_command::<Course>(on_saved);
    }
}
