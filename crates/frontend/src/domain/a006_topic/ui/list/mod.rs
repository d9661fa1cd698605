use crate::domain::a006_topic::ui::details::TopicDetails;
use crate::shared::components::entity_list::{or_dash, EntityList, ListPageState};
use crate::shared::components::notification::{Notification, NotificationKind};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a006_topic::aggregate::Topic;
use leptos::prelude::*;

fn topic_row(t: &Topic) -> Vec<String> {
    vec![t.name.clone(), t.chapter_id.to_string(), or_dash(&t.image)]
}

#[component]
pub fn TopicList() -> impl IntoView {
    let page = ListPageState::new();

    view! {
        <PageFrame page_id="a006_topic--list" category=PAGE_CAT_LIST>
            <div class="page-header">
                <h2>{icon("topic")}"Topics"</h2>
                <button class="btn btn-primary" on:click=move |_| page.open_form()>
                    "New topic"
                </button>
            </div>
            <Notification message=page.notice kind=NotificationKind::Success />
            <Show when=move || page.show_form.get()>
                <TopicDetails on_saved=page.on_saved() on_cancel=page.on_cancel() />
            </Show>
            <EntityList<Topic> reload=page.reload headers=&["Name", "Chapter ID", "Image"] row=topic_row />
        </PageFrame>
    }
}
