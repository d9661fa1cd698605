mod state;

use crate::shared::api::ApiClient;
use crate::shared::components::notification::{Notification, NotificationKind};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, get_sort_indicator, SearchInput, Searchable, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::users::api;
use contracts::domain::common::EntityId;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::create_state;
use std::cmp::Ordering;

impl Searchable for User {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.email, filter)
            || self.phone.as_deref().is_some_and(|p| contains_ci(p, filter))
            || self.role.as_deref().is_some_and(|r| contains_ci(r, filter))
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => self.email.to_lowercase().cmp(&other.email.to_lowercase()),
            "role" => self
                .role
                .as_deref()
                .unwrap_or("")
                .cmp(other.role.as_deref().unwrap_or("")),
            "is_active" => self.is_active.cmp(&other.is_active),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn UsersList() -> impl IntoView {
    let state = create_state();
    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let (loading, set_loading) = signal(false);
    let busy_row = RwSignal::new(None::<EntityId>);

    let refresh_view = move || {
        all_users.with_untracked(|all| state.update(|s| s.refresh(all)));
    };

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_users(&ApiClient::browser()).await;
            if set_loading.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(users) => {
                    all_users.set(users);
                    state.update(|s| s.is_loaded = true);
                    refresh_view();
                }
                Err(e) => {
                    log::error!("Failed to load users: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let toggle_active = move |user: User| {
        busy_row.set(Some(user.id));
        spawn_local(async move {
            let target = !user.is_active;
            let result = api::set_user_active(&ApiClient::browser(), user.id, target).await;
            if busy_row.try_set(None).is_some() {
                return;
            }
            match result {
                Ok(()) => {
                    all_users.update(|all| {
                        if let Some(u) = all.iter_mut().find(|u| u.id == user.id) {
                            u.is_active = target;
                        }
                    });
                    refresh_view();
                    let verb = if target { "activated" } else { "deactivated" };
                    notice.set(Some(format!("{} {}", user.email, verb)));
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let remove = move |user: User| {
        if !confirm(&format!("Delete user {}?", user.email)) {
            return;
        }
        busy_row.set(Some(user.id));
        spawn_local(async move {
            let result = api::delete_user(&ApiClient::browser(), user.id).await;
            if busy_row.try_set(None).is_some() {
                return;
            }
            match result {
                Ok(()) => {
                    all_users.update(|all| all.retain(|u| u.id != user.id));
                    refresh_view();
                    notice.set(Some(format!("{} deleted", user.email)));
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let search = Signal::derive(move || state.with(|s| s.search_query.clone()));
    let apply_search = move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.page = 0;
        });
        refresh_view();
    };

    let toggle_sort = move |field: &'static str| {
        move |_: leptos::ev::MouseEvent| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
            refresh_view();
        }
    };
    let indicator = move |field: &'static str| {
        move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        refresh_view();
    };
    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        refresh_view();
    };

    view! {
        <PageFrame page_id="sys_users--system" category=PAGE_CAT_SYSTEM>
            <div class="page-header">
                <h2>{icon("users")}"Users"</h2>
                <SearchInput value=search on_change=Callback::new(apply_search) />
                <button
                    class="btn btn-secondary"
                    disabled=move || loading.get()
                    on:click=move |_| load_data()
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            </div>

            <Notification message=error />
            <Notification message=notice kind=NotificationKind::Success />

            <table class="table">
                <thead>
                    <tr>
                        <th class="table__cell table__cell--sortable" on:click=toggle_sort("name")>
                            "Name" {indicator("name")}
                        </th>
                        <th class="table__cell table__cell--sortable" on:click=toggle_sort("email")>
                            "Email" {indicator("email")}
                        </th>
                        <th class="table__cell">"Phone"</th>
                        <th class="table__cell table__cell--sortable" on:click=toggle_sort("role")>
                            "Role" {indicator("role")}
                        </th>
                        <th class="table__cell table__cell--sortable" on:click=toggle_sort("is_active")>
                            "Status" {indicator("is_active")}
                        </th>
                        <th class="table__cell table__cell--sortable" on:click=toggle_sort("created_at")>
                            "Created" {indicator("created_at")}
                        </th>
                        <th class="table__cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=|u| (u.id, u.is_active)
                        children=move |user: User| {
                            let id = user.id;
                            let busy = move || busy_row.get() == Some(id);
                            let for_toggle = user.clone();
                            let for_delete = user.clone();
                            view! {
                                <tr class:table__row--inactive=!user.is_active>
                                    <td class="table__cell">{user.name.clone()}</td>
                                    <td class="table__cell">{user.email.clone()}</td>
                                    <td class="table__cell">{user.phone.clone().unwrap_or_else(|| "-".into())}</td>
                                    <td class="table__cell">{user.role.clone().unwrap_or_else(|| "-".into())}</td>
                                    <td class="table__cell">
                                        {if user.is_active { "Active" } else { "Inactive" }}
                                    </td>
                                    <td class="table__cell">
                                        {user.created_at.as_deref().map(format_datetime).unwrap_or_else(|| "-".into())}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="btn btn-small"
                                            disabled=busy
                                            title=if user.is_active { "Deactivate" } else { "Activate" }
                                            on:click=move |_| toggle_active(for_toggle.clone())
                                        >
                                            {icon("toggle")}
                                        </button>
                                        <button
                                            class="btn btn-small btn-danger"
                                            disabled=busy
                                            title="Delete"
                                            on:click=move |_| remove(for_delete.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                total_count=Signal::derive(move || state.with(|s| s.total_count))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(go_to_page)
                on_page_size_change=Callback::new(change_page_size)
            />
        </PageFrame>
    }
}
