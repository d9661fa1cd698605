use crate::dashboards::d400_overview::api;
use crate::shared::api::ApiClient;
use crate::shared::components::notification::Notification;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::updated_caption;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use chrono::Local;
use contracts::dashboards::d400_overview::{CountTile, DashboardCounts};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overview: record count per collection
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (counts, set_counts) = signal(DashboardCounts::default());
    let (loading, set_loading) = signal(false);
    let (updated, set_updated) = signal(None::<String>);
    let warning = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_counts(&ApiClient::browser()).await;
            let failed = result.failed();
            if set_counts.try_set(result).is_some() {
                return;
            }
            set_loading.set(false);
            set_updated.set(Some(updated_caption(Local::now())));
            warning.set((failed > 0).then(|| {
                format!("{} of {} counters could not be loaded", failed, CountTile::ALL.len())
            }));
        });
    });

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page-header">
                <h2>{icon("dashboard")}"Overview"</h2>
                <span class="page-header__caption">{move || updated.get()}</span>
                <button
                    class="btn btn-secondary"
                    disabled=move || loading.get()
                    on:click=move |_| reload.update(|n| *n += 1)
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            </div>
            <Notification message=warning />
            <div class="stat-grid">
                {CountTile::ALL.iter().map(|&tile| view! {
                    <StatCard
                        label=tile.label()
                        icon_name=tile.icon_name()
                        value=Signal::derive(move || counts.with(|c| c.get(tile)))
                        loading=loading
                    />
                }).collect_view()}
            </div>
        </PageFrame>
    }
}
