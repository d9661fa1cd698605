use crate::domain::a003_course::ui::details::CourseDetails;
use crate::shared::components::entity_list::{EntityList, ListPageState};
use crate::shared::components::notification::{Notification, NotificationKind};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_course::aggregate::Course;
use leptos::prelude::*;

fn course_row(c: &Course) -> Vec<String> {
    vec![
        c.name.clone(),
        c.program_id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
    ]
}

#[component]
pub fn CourseList() -> impl IntoView {
    let page = ListPageState::new();

    view! {
        <PageFrame page_id="a003_course--list" category=PAGE_CAT_LIST>
            <div class="page-header">
                <h2>{icon("course")}"Courses"</h2>
                <button class="btn btn-primary" on:click=move |_| page.open_form()>
                    "New course"
                </button>
            </div>
            <Notification message=page.notice kind=NotificationKind::Success />
            <Show when=move || page.show_form.get()>
                <CourseDetails on_saved=page.on_saved() on_cancel=page.on_cancel() />
            </Show>
            <EntityList<Course> reload=page.reload headers=&["Name", "Program ID"] row=course_row />
        </PageFrame>
    }
}
