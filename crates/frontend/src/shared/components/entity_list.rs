use super::notification::Notification;
use crate::shared::api::{ApiClient, ListQuery};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::rc::Rc;

/// State of a catalog page: the inline create form and the list reload tick
#[derive(Clone, Copy)]
pub struct ListPageState {
    pub show_form: RwSignal<bool>,
    pub reload: RwSignal<u32>,
    pub notice: RwSignal<Option<String>>,
}

impl ListPageState {
    pub fn new() -> Self {
        Self {
            show_form: RwSignal::new(false),
            reload: RwSignal::new(0),
            notice: RwSignal::new(None),
        }
    }

    pub fn open_form(&self) {
        self.notice.set(None);
        self.show_form.set(true);
    }

    /// Close the form, confirm, refetch the list
    pub fn on_saved(&self) -> Rc<dyn Fn(String)> {
        let page = *self;
        Rc::new(move |msg| {
            page.show_form.set(false);
            page.notice.set(Some(msg));
            page.reload.update(|n| *n += 1);
        })
    }

    /// Reload generation a load started now answers to
    pub fn ticket(&self) -> u32 {
        self.reload.get_untracked()
    }

    /// False once a newer reload has been requested (or the page is gone)
    pub fn is_current(&self, ticket: u32) -> bool {
        self.reload.try_get_untracked() == Some(ticket)
    }

    pub fn on_cancel(&self) -> Rc<dyn Fn(())> {
        let show_form = self.show_form;
        Rc::new(move |_| show_form.set(false))
    }
}

/// Plain table over one catalog collection.
///
/// Refetches whenever `reload` changes. A failed fetch leaves the table
/// empty and shows the error line.
#[component]
pub fn EntityList<T>(
    #[prop(into)] reload: Signal<u32>,
    #[prop(optional)] query: ListQuery,
    headers: &'static [&'static str],
    /// Cell texts of one row, same order as `headers`
    row: fn(&T) -> Vec<String>,
) -> impl IntoView
where
    T: Entity + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let items = RwSignal::new(Vec::<T>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let ticket = reload.get();
        loading.set(true);
        spawn_local(async move {
            let result = ApiClient::browser().list::<T>(&query).await;
            if reload.try_get_untracked() != Some(ticket) {
                log::debug!("Dropped superseded {} load", T::plural_key());
                return;
            }
            if loading.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(list) => {
                    items.set(list);
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("Failed to load {}: {}", T::plural_key(), e);
                    items.set(Vec::new());
                    error.set(Some(e.user_message()));
                }
            }
        });
    });

    view! {
        <Notification message=error />
        <table class="table">
            <thead>
                <tr>
                    <th class="table__cell table__cell--id">"ID"</th>
                    {headers.iter().map(|h| view! { <th class="table__cell">{*h}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || !items.with(|i| i.is_empty())
                    fallback=move || view! {
                        <tr>
                            <td class="table__empty" colspan=(headers.len() + 1).to_string()>
                                {move || if loading.get() { "Loading..." } else { "No records" }}
                            </td>
                        </tr>
                    }
                >
                    <For
                        each=move || items.get()
                        key=|item| item.id()
                        children=move |item| view! {
                            <tr>
                                <td class="table__cell table__cell--id">{item.id()}</td>
                                {row(&item).into_iter().map(|cell| view! {
                                    <td class="table__cell">{cell}</td>
                                }).collect_view()}
                            </tr>
                        }
                    />
                </Show>
            </tbody>
        </table>
    }
}

/// `Option<String>` column value, "-" when absent
pub fn or_dash(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(&Some("Physics".into())), "Physics");
        assert_eq!(or_dash(&Some("  ".into())), "-");
        assert_eq!(or_dash(&None), "-");
    }

    #[test]
    fn test_superseded_load_is_not_current() {
        let page = ListPageState::new();
        let first = page.ticket();
        assert!(page.is_current(first));

        // saving the form starts a new load
        (page.on_saved())("Board saved".to_string());
        let second = page.ticket();

        assert!(!page.is_current(first));
        assert!(page.is_current(second));
        assert!(!page.show_form.get_untracked());
        assert_eq!(page.notice.get_untracked().as_deref(), Some("Board saved"));
    }
}
