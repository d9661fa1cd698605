use crate::domain::a002_program::ui::details::ProgramDetails;
use crate::shared::components::entity_list::{or_dash, EntityList, ListPageState};
use crate::shared::components::notification::{Notification, NotificationKind};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_program::aggregate::Program;
use leptos::prelude::*;

fn program_row(p: &Program) -> Vec<String> {
    vec![
        p.name.clone(),
        p.board_id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
        or_dash(&p.description),
    ]
}

#[component]
pub fn ProgramList() -> impl IntoView {
    let page = ListPageState::new();

    view! {
        <PageFrame page_id="a002_program--list" category=PAGE_CAT_LIST>
            <div class="page-header">
                <h2>{icon("program")}"Programs"</h2>
                <button class="btn btn-primary" on:click=move |_| page.open_form()>
                    "New program"
                </button>
            </div>
            <Notification message=page.notice kind=NotificationKind::Success />
            <Show when=move || page.show_form.get()>
                <ProgramDetails on_saved=page.on_saved() on_cancel=page.on_cancel() />
            </Show>
            <EntityList<Program>
                reload=page.reload
                headers=&["Name", "Board ID", "Description"]
                row=program_row
            />
        </PageFrame>
    }
}
