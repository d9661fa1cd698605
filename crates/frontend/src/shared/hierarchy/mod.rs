//! Hierarchy enrichment and grouping for cascading selection UIs
//!
//! Flat lookup lists (programs, courses, subjects, chapters) are joined by
//! foreign key into records labelled with their ancestors (`enrich`), then
//! folded into an insertion-ordered tree (`group`).

mod enrich;
mod group;
mod ordered;

pub use enrich::{
    enrich, enrich_chapters, enrich_courses, enrich_subjects, EnrichedChapter, EnrichedCourse,
    EnrichedSubject, Lookup, Sentinels, NO_COURSE, NO_PROGRAM, NO_SUBJECT,
};
pub use group::{
    flatten_chapters, flatten_subjects, group_chapters, group_courses, group_subjects,
    flat_grouped_options, grouped_options, ChapterTree, CourseTree, OptionGroup, SelectOption, SubjectTree,
};
pub use ordered::OrderedGroups;
