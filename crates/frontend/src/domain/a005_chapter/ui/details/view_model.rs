use super::model::FORM;
use crate::shared::api::ApiClient;
use crate::shared::form::FormViewModel;
use crate::shared::hierarchy::OptionGroup;
use crate::shared::lookup_cache::{LookupCache, LookupScope};
use contracts::domain::a005_chapter::aggregate::Chapter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ChapterDetailsViewModel {
    pub form: FormViewModel,
    pub subject_groups: RwSignal<Vec<OptionGroup>>,
    pub lookups_loading: RwSignal<bool>,
}

impl ChapterDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: FormViewModel::new(FORM),
            subject_groups: RwSignal::new(Vec::new()),
            lookups_loading: RwSignal::new(false),
        }
    }

    pub fn load_lookups(&self) {
        let groups = self.subject_groups;
        let loading = self.lookups_loading;
        loading.set(true);
        spawn_local(async move {
            let cache = LookupCache::load_or_empty(&ApiClient::browser(), LookupScope::Subjects).await;
            groups.try_set(cache.subject_options());
            loading.try_set(false);
        });
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(String)>) {
        self.form.save_command::<Chapter>(on_saved);
    }
}
