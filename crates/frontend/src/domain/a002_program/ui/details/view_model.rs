use super::model::FORM;
use crate::shared::api::ListQuery;
use crate::shared::cascade::list_fetcher;
use crate::shared::form::FormViewModel;
use crate::shared::hierarchy::SelectOption;
use contracts::domain::a001_board::aggregate::Board;
use contracts::domain::a002_program::aggregate::Program;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ProgramDetailsViewModel {
    pub form: FormViewModel,
    pub boards: RwSignal<Vec<SelectOption>>,
    pub boards_loading: RwSignal<bool>,
}

impl ProgramDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: FormViewModel::new(FORM),
            boards: RwSignal::new(Vec::new()),
            boards_loading: RwSignal::new(false),
        }
    }

    /// Board options; stays empty if the fetch fails
    pub fn load_boards(&self) {
        let boards = self.boards;
        let loading = self.boards_loading;
        let fetch = list_fetcher::<Board>(|_| ListQuery::all());
        loading.set(true);
        spawn_local(async move {
            let options = match fetch(None).await {
                Ok(options) => options,
                Err(e) => {
                    log::warn!("Board options unavailable: {}", e);
                    Vec::new()
                }
            };
            boards.try_set(options);
            loading.try_set(false);
        });
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(String)>) {
        self.form.save_command::<Program>(on_saved);
    }
}
