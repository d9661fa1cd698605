use super::model::{cascade_fetchers, CHAPTER_ID, FORM};
use crate::shared::cascade::CascadeHandle;
use crate::shared::form::FormViewModel;
use contracts::domain::a006_topic::aggregate::Topic;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct TopicDetailsViewModel {
    pub form: FormViewModel,
    pub cascade: CascadeHandle,
}

impl TopicDetailsViewModel {
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
            let chapter = vm.cascade.selected(1);
            vm.form.set_id(CHAPTER_ID, chapter);
        });
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(String)>) {
        self.form.save_command::<Topic>(on_saved);
    }
}
