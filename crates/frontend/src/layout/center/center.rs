use crate::dashboards::OverviewDashboard;
use crate::domain::a001_board::ui::list::BoardList;
use crate::domain::a002_program::ui::list::ProgramList;
use crate::domain::a003_course::ui::list::CourseList;
use crate::domain::a004_subject::ui::list::SubjectList;
use crate::domain::a005_chapter::ui::list::ChapterList;
use crate::domain::a006_topic::ui::list::TopicList;
use crate::domain::a007_question::ui::list::QuestionList;
use crate::domain::a008_book_reference::ui::list::BookReferenceList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::ui::list::UsersList;
use leptos::prelude::*;

fn render_page(key: &str) -> AnyView {
    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),
        "a001_board" => view! { <BoardList /> }.into_any(),
        "a002_program" => view! { <ProgramList /> }.into_any(),
        "a003_course" => view! { <CourseList /> }.into_any(),
        "a004_subject" => view! { <SubjectList /> }.into_any(),
        "a005_chapter" => view! { <ChapterList /> }.into_any(),
        "a006_topic" => view! { <TopicList /> }.into_any(),
        "a007_question" => view! { <QuestionList /> }.into_any(),
        "a008_book_reference" => view! { <BookReferenceList /> }.into_any(),
        "sys_users" => view! {
            <RequireAdmin>
                <UsersList />
            </RequireAdmin>
        }
        .into_any(),
        other => {
            let other = other.to_string();
            view! { <div class="placeholder">"Unknown page: " {other}</div> }.into_any()
        }
    }
}

/// Content area; remounts the page whenever the active key changes
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-main__content" style="flex: 1; overflow: auto;">
            {move || render_page(&ctx.active.get())}
        </div>
    }
}
