use crate::domain::a001_board::ui::details::BoardDetails;
use crate::shared::components::entity_list::{or_dash, EntityList, ListPageState};
use crate::shared::components::notification::{Notification, NotificationKind};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_board::aggregate::Board;
use leptos::prelude::*;

fn board_row(b: &Board) -> Vec<String> {
    vec![b.name.clone(), or_dash(&b.description)]
}

#[component]
pub fn BoardList() -> impl IntoView {
    let page = ListPageState::new();

    view! {
        <PageFrame page_id="a001_board--list" category=PAGE_CAT_LIST>
            <div class="page-header">
                <h2>{icon("board")}"Boards"</h2>
                <button class="btn btn-primary" on:click=move |_| page.open_form()>
                    "New board"
                </button>
            </div>
            <Notification message=page.notice kind=NotificationKind::Success />
            <Show when=move || page.show_form.get()>
                <BoardDetails on_saved=page.on_saved() on_cancel=page.on_cancel() />
            </Show>
            <EntityList<Board> reload=page.reload headers=&["Name", "Description"] row=board_row />
        </PageFrame>
    }
}
