//! Chapters as a collapsible tree: program → course → subject → chapter

use crate::domain::a005_chapter::ui::details::ChapterDetails;
use crate::shared::api::ApiClient;
use crate::shared::components::entity_list::{or_dash, ListPageState};
use crate::shared::components::notification::{Notification, NotificationKind};
use crate::shared::hierarchy::{group_chapters, ChapterTree};
use crate::shared::icons::icon;
use crate::shared::lookup_cache::{LookupCache, LookupScope};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

const PATH_SEP: char = '\u{1f}';

#[derive(Debug, Clone, PartialEq)]
pub enum TreeLine {
    Group {
        path: String,
        label: String,
        depth: usize,
        count: usize,
    },
    Chapter {
        parent: String,
        depth: usize,
        id: EntityId,
        name: String,
        title: String,
    },
}

fn join_path(parent: &str, label: &str) -> String {
    if parent.is_empty() {
        label.to_string()
    } else {
        format!("{}{}{}", parent, PATH_SEP, label)
    }
}

/// Pre-order walk of the tree, groups before their children
pub fn tree_lines(tree: &ChapterTree) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    for (program, courses) in tree.iter() {
        let program_path = join_path("", program);
        let count = courses
            .iter()
            .flat_map(|(_, subjects)| subjects.iter())
            .map(|(_, chapters)| chapters.len())
            .sum();
        lines.push(TreeLine::Group {
            path: program_path.clone(),
            label: program.to_string(),
            depth: 0,
            count,
        });
        for (course, subjects) in courses.iter() {
            let course_path = join_path(&program_path, course);
            lines.push(TreeLine::Group {
                path: course_path.clone(),
                label: course.to_string(),
                depth: 1,
                count: subjects.iter().map(|(_, chapters)| chapters.len()).sum(),
            });
            for (subject, chapters) in subjects.iter() {
                let subject_path = join_path(&course_path, subject);
                lines.push(TreeLine::Group {
                    path: subject_path.clone(),
                    label: subject.to_string(),
                    depth: 2,
                    count: chapters.len(),
                });
                lines.extend(chapters.iter().map(|c| TreeLine::Chapter {
                    parent: subject_path.clone(),
                    depth: 3,
                    id: c.chapter.id,
                    name: c.chapter.name.clone(),
                    title: or_dash(&c.chapter.title),
                }));
            }
        }
    }
    lines
}

fn is_under(path: &str, ancestor: &str) -> bool {
    path.len() > ancestor.len()
        && path.starts_with(ancestor)
        && path[ancestor.len()..].starts_with(PATH_SEP)
}

/// Drop lines hidden under a collapsed group
pub fn visible_lines(lines: &[TreeLine], collapsed: &HashSet<String>) -> Vec<TreeLine> {
    lines
        .iter()
        .filter(|line| match line {
            TreeLine::Group { path, .. } => !collapsed.iter().any(|c| is_under(path, c)),
            TreeLine::Chapter { parent, .. } => {
                !collapsed.iter().any(|c| parent == c || is_under(parent, c))
            }
        })
        .cloned()
        .collect()
}

#[component]
pub fn ChapterList() -> impl IntoView {
    let page = ListPageState::new();
    let lines = RwSignal::new(Vec::<TreeLine>::new());
    let collapsed = RwSignal::new(HashSet::<String>::new());
    let loading = RwSignal::new(false);

    Effect::new(move |_| {
        page.reload.track();
        let ticket = page.ticket();
        loading.set(true);
        spawn_local(async move {
            let cache = LookupCache::load_or_empty(&ApiClient::browser(), LookupScope::Chapters).await;
            if !page.is_current(ticket) {
                return;
            }
            let tree = group_chapters(cache.chapters_enriched());
            lines.try_set(tree_lines(&tree));
            loading.try_set(false);
        });
    });

    let toggle = move |path: String| {
        collapsed.update(|c| {
            if !c.remove(&path) {
                c.insert(path);
            }
        });
    };

    let render_line = move |line: TreeLine| match line {
        TreeLine::Group { path, label, depth, count } => {
            let is_open = {
                let path = path.clone();
                move || !collapsed.with(|c| c.contains(&path))
            };
            let level_icon = match depth {
                0 => "program",
                1 => "course",
                _ => "subject",
            };
            view! {
                <div
                    class=format!("tree__row tree__row--group tree__row--depth-{}", depth)
                    on:click=move |_| toggle(path.clone())
                >
                    {move || if is_open() { icon("chevron-down") } else { icon("chevron-right") }}
                    {icon(level_icon)}
                    <span class="tree__label">{label}</span>
                    <span class="tree__count">{count}</span>
                </div>
            }
            .into_any()
        }
        TreeLine::Chapter { depth, id, name, title, .. } => view! {
            <div class=format!("tree__row tree__row--item tree__row--depth-{}", depth)>
                {icon("chapter")}
                <span class="tree__id">{id}</span>
                <span class="tree__label">{name}</span>
                <span class="tree__title">{title}</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <PageFrame page_id="a005_chapter--list" category=PAGE_CAT_LIST>
            <div class="page-header">
                <h2>{icon("chapter")}"Chapters"</h2>
                <button class="btn btn-primary" on:click=move |_| page.open_form()>
                    "New chapter"
                </button>
            </div>
            <Notification message=page.notice kind=NotificationKind::Success />
            <Show when=move || page.show_form.get()>
                <ChapterDetails on_saved=page.on_saved() on_cancel=page.on_cancel() />
            </Show>

            <div class="tree">
                {move || {
                    let visible = collapsed.with(|c| lines.with(|l| visible_lines(l, c)));
                    if visible.is_empty() {
                        let text = if loading.get() { "Loading..." } else { "No chapters" };
                        view! { <div class="tree__empty">{text}</div> }.into_any()
                    } else {
                        visible.into_iter().map(render_line).collect_view().into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::hierarchy::{enrich_chapters, NO_SUBJECT};
    use contracts::domain::a004_subject::aggregate::Subject;
    use contracts::domain::a005_chapter::aggregate::Chapter;

    fn chapter(id: EntityId, subject_id: EntityId, name: &str) -> Chapter {
        Chapter {
            id,
            subject_id,
            name: name.into(),
            title: None,
        }
    }

    fn lines() -> Vec<TreeLine> {
        let subjects = vec![Subject {
            id: 100,
            name: "Mechanics".into(),
            title: None,
            short_des: None,
            course_id: None,
            thumbnail: None,
        }];
        let chapters = vec![
            chapter(1, 100, "Motion"),
            chapter(2, 999, "Lost"),
            chapter(3, 100, "Forces"),
        ];
        tree_lines(&group_chapters(enrich_chapters(&chapters, &subjects, &[], &[])))
    }

    fn group_labels(lines: &[TreeLine]) -> Vec<(usize, String, usize)> {
        lines
            .iter()
            .filter_map(|l| match l {
                TreeLine::Group { label, depth, count, .. } => Some((*depth, label.clone(), *count)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_tree_lines_counts() {
        let lines = lines();
        let groups = group_labels(&lines);

        assert_eq!(groups[0].2, 3);
        assert_eq!(groups[1].2, 3);
        assert_eq!(groups[2], (2, "Mechanics".to_string(), 2));
        assert_eq!(groups[3], (2, NO_SUBJECT.to_string(), 1));
        assert_eq!(lines.iter().filter(|l| matches!(l, TreeLine::Chapter { .. })).count(), 3);
    }

    #[test]
    fn test_collapse_hides_descendants_only() {
        let lines = lines();
        let subject_path = match &lines[2] {
            TreeLine::Group { path, .. } => path.clone(),
            other => panic!("unexpected line {:?}", other),
        };
        let collapsed: HashSet<String> = [subject_path].into_iter().collect();

        let visible = visible_lines(&lines, &collapsed);

        // Mechanics' two chapters are hidden, the orphan subject stays open
        assert_eq!(visible.len(), lines.len() - 2);
        assert!(visible.iter().any(|l| matches!(l, TreeLine::Chapter { name, .. } if name == "Lost")));
    }

    #[test]
    fn test_collapse_root_hides_everything_below() {
        let lines = lines();
        let root = match &lines[0] {
            TreeLine::Group { path, .. } => path.clone(),
            other => panic!("unexpected line {:?}", other),
        };
        let visible = visible_lines(&lines, &[root].into_iter().collect());
        assert_eq!(visible.len(), 1);
    }
}
