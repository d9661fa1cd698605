//! Subjects grouped program → course

use crate::domain::a004_subject::ui::details::SubjectDetails;
use crate::shared::api::ApiClient;
use crate::shared::components::entity_list::{or_dash, ListPageState};
use crate::shared::components::notification::{Notification, NotificationKind};
use crate::shared::hierarchy::{group_subjects, SubjectTree};
use crate::shared::icons::icon;
use crate::shared::lookup_cache::{LookupCache, LookupScope};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectRow {
    pub id: EntityId,
    pub name: String,
    pub title: String,
    pub short_des: String,
}

/// One program block with its course sub-blocks
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramSection {
    pub program: String,
    pub courses: Vec<(String, Vec<SubjectRow>)>,
}

/// Flatten the tree into render order; `alphabetical` sorts group labels,
/// otherwise they keep first-seen order
pub fn subject_sections(tree: &SubjectTree, alphabetical: bool) -> Vec<ProgramSection> {
    let programs: Vec<&str> = if alphabetical {
        tree.sorted_keys()
    } else {
        tree.keys().collect()
    };

    programs
        .into_iter()
        .filter_map(|program| {
            let courses = tree.get(program)?;
            let course_keys: Vec<&str> = if alphabetical {
                courses.sorted_keys()
            } else {
                courses.keys().collect()
            };
            Some(ProgramSection {
                program: program.to_string(),
                courses: course_keys
                    .into_iter()
                    .filter_map(|course| {
                        let rows = courses.get(course)?.iter().map(|s| SubjectRow {
                            id: s.subject.id,
                            name: s.subject.name.clone(),
                            title: or_dash(&s.subject.title),
                            short_des: or_dash(&s.subject.short_des),
                        });
                        Some((course.to_string(), rows.collect()))
                    })
                    .collect(),
            })
        })
        .collect()
}

#[component]
pub fn SubjectList() -> impl IntoView {
    let page = ListPageState::new();
    let tree = RwSignal::new(SubjectTree::new());
    let loading = RwSignal::new(false);
    let alphabetical = RwSignal::new(false);

    Effect::new(move |_| {
        page.reload.track();
        let ticket = page.ticket();
        loading.set(true);
        spawn_local(async move {
            let cache = LookupCache::load_or_empty(&ApiClient::browser(), LookupScope::Subjects).await;
            if !page.is_current(ticket) {
                return;
            }
            tree.try_set(group_subjects(cache.subjects_enriched()));
            loading.try_set(false);
        });
    });

    let sections = Memo::new(move |_| tree.with(|t| subject_sections(t, alphabetical.get())));

    view! {
        <PageFrame page_id="a004_subject--list" category=PAGE_CAT_LIST>
            <div class="page-header">
                <h2>{icon("subject")}"Subjects"</h2>
                <label class="page-header__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || alphabetical.get()
                        on:change=move |ev| alphabetical.set(event_target_checked(&ev))
                    />
                    "A–Z"
                </label>
                <button class="btn btn-primary" on:click=move |_| page.open_form()>
                    "New subject"
                </button>
            </div>
            <Notification message=page.notice kind=NotificationKind::Success />
            <Show when=move || page.show_form.get()>
                <SubjectDetails on_saved=page.on_saved() on_cancel=page.on_cancel() />
            </Show>

            <Show
                when=move || !sections.with(|s| s.is_empty())
                fallback=move || view! {
                    <div class="grouped-list__empty">
                        {move || if loading.get() { "Loading..." } else { "No subjects" }}
                    </div>
                }
            >
                <div class="grouped-list">
                    {move || sections.get().into_iter().map(|section| view! {
                        <section class="grouped-list__program">
                            <h3>{icon("program")}{section.program}</h3>
                            {section.courses.into_iter().map(|(course, rows)| view! {
                                <div class="grouped-list__course">
                                    <h4>{icon("course")}{course}</h4>
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th class="table__cell table__cell--id">"ID"</th>
                                                <th class="table__cell">"Name"</th>
                                                <th class="table__cell">"Title"</th>
                                                <th class="table__cell">"Short description"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows.into_iter().map(|r| view! {
                                                <tr>
                                                    <td class="table__cell table__cell--id">{r.id}</td>
                                                    <td class="table__cell">{r.name}</td>
                                                    <td class="table__cell">{r.title}</td>
                                                    <td class="table__cell">{r.short_des}</td>
                                                </tr>
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            }).collect_view()}
                        </section>
                    }).collect_view()}
                </div>
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::hierarchy::enrich_subjects;
    use contracts::domain::a002_program::aggregate::Program;
    use contracts::domain::a003_course::aggregate::Course;
    use contracts::domain::a004_subject::aggregate::Subject;

    fn subject(id: EntityId, name: &str, course_id: Option<EntityId>) -> Subject {
        Subject {
            id,
            name: name.into(),
            title: None,
            short_des: None,
            course_id,
            thumbnail: None,
        }
    }

    fn tree() -> SubjectTree {
        let programs = vec![
            Program { id: 1, name: "Science".into(), board_id: None, description: None },
            Program { id: 2, name: "Arts".into(), board_id: None, description: None },
        ];
        let courses = vec![
            Course { id: 10, name: "Physics".into(), program_id: Some(1) },
            Course { id: 20, name: "Music".into(), program_id: Some(2) },
        ];
        let subjects = vec![
            subject(100, "Mechanics", Some(10)),
            subject(200, "Harmony", Some(20)),
            subject(101, "Optics", Some(10)),
        ];
        group_subjects(enrich_subjects(&subjects, &courses, &programs))
    }

    #[test]
    fn test_sections_keep_first_seen_order() {
        let sections = subject_sections(&tree(), false);

        assert_eq!(sections[0].program, "Science");
        assert_eq!(sections[1].program, "Arts");
        let (course, rows) = &sections[0].courses[0];
        assert_eq!(course, "Physics");
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![100, 101]);
        assert_eq!(rows[0].title, "-");
    }

    #[test]
    fn test_sections_alphabetical() {
        let sections = subject_sections(&tree(), true);
        assert_eq!(sections[0].program, "Arts");
        assert_eq!(sections[1].program, "Science");
    }
}
