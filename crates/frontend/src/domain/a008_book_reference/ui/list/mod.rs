use crate::domain::a008_book_reference::ui::details::BookReferenceDetails;
use crate::shared::components::entity_list::{or_dash, EntityList, ListPageState};
use crate::shared::components::notification::{Notification, NotificationKind};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a008_book_reference::aggregate::BookReference;
use leptos::prelude::*;

fn book_row(b: &BookReference) -> Vec<String> {
    vec![
        b.title.clone(),
        or_dash(&b.author),
        b.subject_id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
        or_dash(&b.file_url),
    ]
}

#[component]
pub fn BookReferenceList() -> impl IntoView {
    let page = ListPageState::new();

    view! {
        <PageFrame page_id="a008_book_reference--list" category=PAGE_CAT_LIST>
            <div class="page-header">
                <h2>{icon("book")}"Book references"</h2>
                <button class="btn btn-primary" on:click=move |_| page.open_form()>
                    "New book reference"
                </button>
            </div>
            <Notification message=page.notice kind=NotificationKind::Success />
            <Show when=move || page.show_form.get()>
                <BookReferenceDetails on_saved=page.on_saved() on_cancel=page.on_cancel() />
            </Show>
            <EntityList<BookReference>
                reload=page.reload
                headers=&["Title", "Author", "Subject ID", "File"]
                row=book_row
            />
        </PageFrame>
    }
}
