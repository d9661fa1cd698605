//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::{MenuGroup, MENU};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

fn visible_groups(is_admin: bool) -> Vec<MenuGroup> {
    MENU.iter()
        .filter(|group| is_admin || group.pages.iter().any(|p| !p.admin_only))
        .copied()
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();
    let is_admin = auth_state.with_untracked(|s| s.is_admin());

    // all groups start expanded
    let expanded = RwSignal::new(MENU.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            {visible_groups(is_admin).into_iter().map(|group| {
                let group_id = group.id;
                let is_expanded = move || expanded.with(|ids| ids.contains(&group_id));
                view! {
                    <div>
                        <div
                            class="app-sidebar__item app-sidebar__item--group"
                            on:click=move |_| expanded.update(|ids| {
                                if let Some(pos) = ids.iter().position(|id| *id == group_id) {
                                    ids.remove(pos);
                                } else {
                                    ids.push(group_id);
                                }
                            })
                        >
                            <span>{group.label}</span>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {group.pages.iter()
                                    .filter(|p| is_admin || !p.admin_only)
                                    .map(|page| {
                                        let key = page.key;
                                        view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || ctx.is_active(key)
                                                on:click=move |_| ctx.open(key)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(page.icon)}
                                                    <span>{page.label}</span>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_hidden_from_non_admins() {
        let ids: Vec<&str> = visible_groups(false).iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["dashboards", "catalog"]);
        assert_eq!(visible_groups(true).len(), MENU.len());
    }
}
