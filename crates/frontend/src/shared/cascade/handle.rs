use super::{CascadeController, FetchTicket};
use crate::shared::api::{ApiClient, ApiError, ListQuery};
use crate::shared::hierarchy::SelectOption;
use contracts::domain::common::entity_id::parse_optional_id;
use contracts::domain::common::{Entity, EntityId};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::rc::Rc;

/// Loads the options of one level given the parent selection
pub type LevelFetcher =
    Rc<dyn Fn(Option<EntityId>) -> LocalBoxFuture<'static, Result<Vec<SelectOption>, ApiError>>>;

/// Fetcher for a catalog collection filtered by the parent id
///
/// `filter` maps the parent selection to the list query, e.g.
/// `|p| ListQuery { subject_id: p, ..ListQuery::all() }`.
pub fn list_fetcher<T>(filter: fn(Option<EntityId>) -> ListQuery) -> LevelFetcher
where
    T: Entity + DeserializeOwned + 'static,
{
    Rc::new(move |parent| {
        let query = filter(parent);
        async move {
            let api = ApiClient::browser();
            let items: Vec<T> = api.list(&query).await?;
            Ok(items
                .iter()
                .map(|item| SelectOption::new(item.id(), item.display_name()))
                .collect())
        }
        .boxed_local()
    })
}

/// Reactive wrapper over `CascadeController`
///
/// Copy, so it can be moved into any number of view closures.
#[derive(Clone, Copy)]
pub struct CascadeHandle {
    pub state: RwSignal<CascadeController>,
    fetchers: StoredValue<Vec<LevelFetcher>, LocalStorage>,
}

impl CascadeHandle {
    /// One fetcher per level; level 0's fetcher is called with `None`
    pub fn new(fetchers: Vec<LevelFetcher>) -> Self {
        Self {
            state: RwSignal::new(CascadeController::new(fetchers.len())),
            fetchers: StoredValue::new_local(fetchers),
        }
    }

    /// Load the root options (call once on mount)
    pub fn start(&self) {
        let ticket = self.state.try_update(|c| c.begin_root_fetch());
        if let Some(ticket) = ticket {
            self.run(ticket);
        }
    }

    pub fn select(&self, level: usize, value: Option<EntityId>) {
        let ticket = self.state.try_update(|c| c.select(level, value)).flatten();
        if let Some(ticket) = ticket {
            self.run(ticket);
        }
    }

    /// Select from a raw `<select>` value; empty or unparsable clears the level
    pub fn select_raw(&self, level: usize, raw: &str) {
        let value = parse_optional_id(raw).unwrap_or_else(|e| {
            log::warn!("Ignoring selection: {}", e);
            None
        });
        self.select(level, value);
    }

    fn run(&self, ticket: FetchTicket) {
        let Some(fetch) = self.fetchers.with_value(|f| f.get(ticket.level).cloned()) else {
            return;
        };
        let state = self.state;
        spawn_local(async move {
            let result = fetch(ticket.parent).await;
            // the form may be gone by now
            state.try_update(|c| c.resolve(ticket, result));
        });
    }

    pub fn depth(&self) -> usize {
        self.state.with_untracked(|c| c.depth())
    }

    pub fn selected(&self, level: usize) -> Option<EntityId> {
        self.state.with(|c| c.selected(level))
    }

    pub fn options(&self, level: usize) -> Vec<SelectOption> {
        self.state.with(|c| {
            c.level(level)
                .map(|l| l.options().to_vec())
                .unwrap_or_default()
        })
    }

    pub fn is_loading(&self, level: usize) -> bool {
        self.state
            .with(|c| c.level(level).map(|l| l.is_loading()).unwrap_or(false))
    }

    pub fn selected_label(&self, level: usize) -> Option<String> {
        self.state.with(|c| {
            c.level(level)
                .and_then(|l| l.selected_label())
                .map(str::to_string)
        })
    }
}
