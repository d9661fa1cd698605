use super::model::FORM;
use crate::shared::api::ApiClient;
use crate::shared::form::FormViewModel;
use crate::shared::hierarchy::OptionGroup;
use crate::shared::lookup_cache::{LookupCache, LookupScope};
use contracts::domain::a004_subject::aggregate::Subject;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct SubjectDetailsViewModel {
    pub form: FormViewModel,
    pub course_groups: RwSignal<Vec<OptionGroup>>,
    pub lookups_loading: RwSignal<bool>,
}

impl SubjectDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: FormViewModel::new(FORM),
            course_groups: RwSignal::new(Vec::new()),
            lookups_loading: RwSignal::new(false),
        }
    }

    /// Programs and courses, once per form
    pub fn load_lookups(&self) {
        let groups = self.course_groups;
        let loading = self.lookups_loading;
        loading.set(true);
        spawn_local(async move {
            let cache = LookupCache::load_or_empty(&ApiClient::browser(), LookupScope::Courses).await;
            groups.try_set(cache.course_options());
            loading.try_set(false);
        });
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(String)>) {
        self.form.save_command::<Subject>(on_saved);
    }
}
