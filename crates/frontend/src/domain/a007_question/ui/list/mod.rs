use crate::domain::a007_question::ui::details::QuestionDetails;
use crate::shared::components::entity_list::{or_dash, EntityList, ListPageState};
use crate::shared::components::notification::{Notification, NotificationKind};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a007_question::aggregate::Question;
use leptos::prelude::*;

fn question_row(q: &Question) -> Vec<String> {
    vec![
        q.question.clone(),
        or_dash(&q.answer),
        q.topic_id.to_string(),
        q.status.map(|s| s.to_string()).unwrap_or_else(|| "-".into()),
    ]
}

#[component]
pub fn QuestionList() -> impl IntoView {
    let page = ListPageState::new();

    view! {
        <PageFrame page_id="a007_question--list" category=PAGE_CAT_LIST>
            <div class="page-header">
                <h2>{icon("question")}"Questions"</h2>
                <button class="btn btn-primary" on:click=move |_| page.open_form()>
                    "New question"
                </button>
            </div>
            <Notification message=page.notice kind=NotificationKind::Success />
            <Show when=move || page.show_form.get()>
                <QuestionDetails on_saved=page.on_saved() on_cancel=page.on_cancel() />
            </Show>
            <EntityList<Question>
                reload=page.reload
                headers=&["Question", "Answer", "Topic ID", "Status"]
                row=question_row
            />
        </PageFrame>
    }
}
