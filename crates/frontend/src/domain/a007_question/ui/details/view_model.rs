use super::model::{cascade_fetchers, FORM, TOPIC_ID};
use crate::shared::cascade::CascadeHandle;
use crate::shared::form::FormViewModel;
use contracts::domain::a007_question::aggregate::Question;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct QuestionDetailsViewModel {
    pub form: FormViewModel,
    pub cascade: CascadeHandle,
}

impl QuestionDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: FormViewModel::new(FORM),
            cascade: CascadeHandle::new(cascade_fetchers()),
        }
    }

    pub fn start(&self) {
        self.cascade.start();
        let vm = *self;
        Effect::new(move |_| {
            let topic = vm.cascade.selected(2);
            vm.form.set_id(TOPIC_ID, topic);
        });
    }

    pub fn is_draft(&self) -> bool {
        self.form.fields.with(|f| f.publish.draft())
    }

    pub fn is_published(&self) -> bool {
        self.form.fields.with(|f| f.publish.published())
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(String)>) {
        self.form.save_command::<Question>(on_saved);
    }
}
