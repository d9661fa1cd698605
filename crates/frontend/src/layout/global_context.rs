use crate::layout::pages::{is_known_page, DEFAULT_PAGE};
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Which page is open and how the shell is arranged
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore `?active=` from the address bar and keep it in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = active_from_query(&search) {
            self.active.set(key);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for(&this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open(&self, key: &str) {
        if !is_known_page(key) {
            log::warn!("Unknown page '{}'", key);
            return;
        }
        log::debug!("open page '{}'", key);
        self.active.set(key.to_string());
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|active| active == key)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

/// Page key from a `?active=...` query string, if it names a known page
pub fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .filter(|key| is_known_page(key))
        .cloned()
}

fn query_for(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active".to_string(), key.to_string())]))
        .unwrap_or_default();
    format!("?{}", query)
}
