//! Session-scoped lookup lists for the hierarchy-aware forms
//!
//! Loaded once when a form mounts, kept for the component's lifetime and
//! never persisted.

use crate::shared::api::{ApiClient, ApiError, ListQuery};
use crate::shared::hierarchy::{
    enrich_chapters, enrich_courses, enrich_subjects, flat_grouped_options, group_courses,
    group_subjects, grouped_options, EnrichedChapter, EnrichedCourse, EnrichedSubject,
    OptionGroup, SelectOption,
};
use contracts::domain::a002_program::aggregate::Program;
use contracts::domain::a003_course::aggregate::Course;
use contracts::domain::a004_subject::aggregate::Subject;
use contracts::domain::a005_chapter::aggregate::Chapter;

/// Which lists a form needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupScope {
    /// programs, courses
    Courses,
    /// programs, courses, subjects
    Subjects,
    /// programs, courses, subjects, chapters
    Chapters,
}

impl LookupScope {
    fn needs_subjects(&self) -> bool {
        matches!(self, LookupScope::Subjects | LookupScope::Chapters)
    }

    fn needs_chapters(&self) -> bool {
        matches!(self, LookupScope::Chapters)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupCache {
    pub programs: Vec<Program>,
    pub courses: Vec<Course>,
    pub subjects: Vec<Subject>,
    pub chapters: Vec<Chapter>,
}

impl LookupCache {
    /// Fetch all lists of `scope` concurrently
    ///
    /// All requests must succeed; a single failure fails the whole load.
    pub async fn load(api: &ApiClient, scope: LookupScope) -> Result<Self, ApiError> {
        let all = ListQuery::all();
        let subjects = async {
            if scope.needs_subjects() {
                api.list::<Subject>(&all).await
            } else {
                Ok(Vec::new())
            }
        };
        let chapters = async {
            if scope.needs_chapters() {
                api.list::<Chapter>(&all).await
            } else {
                Ok(Vec::new())
            }
        };

        let (programs, courses, subjects, chapters) = futures::join!(
            api.list::<Program>(&all),
            api.list::<Course>(&all),
            subjects,
            chapters
        );

        Ok(Self {
            programs: programs?,
            courses: courses?,
            subjects: subjects?,
            chapters: chapters?,
        })
    }

    /// Like `load`, but a failure yields an empty cache instead of partial data
    pub async fn load_or_empty(api: &ApiClient, scope: LookupScope) -> Self {
        match Self::load(api, scope).await {
            Ok(cache) => cache,
            Err(e) => {
                log::warn!("Lookup lists unavailable ({:?}): {}", scope, e);
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
            && self.courses.is_empty()
            && self.subjects.is_empty()
            && self.chapters.is_empty()
    }

    pub fn courses_enriched(&self) -> Vec<EnrichedCourse> {
        enrich_courses(&self.courses, &self.programs)
    }

    pub fn subjects_enriched(&self) -> Vec<EnrichedSubject> {
        enrich_subjects(&self.subjects, &self.courses, &self.programs)
    }

    pub fn chapters_enriched(&self) -> Vec<EnrichedChapter> {
        enrich_chapters(&self.chapters, &self.subjects, &self.courses, &self.programs)
    }

    /// Courses under one `<optgroup>` per program
    pub fn course_options(&self) -> Vec<OptionGroup> {
        let tree = group_courses(self.courses_enriched());
        flat_grouped_options(&tree, |c| SelectOption::new(c.course.id, c.course.name.clone()))
    }

    /// Subjects under "Program / Course" groups
    pub fn subject_options(&self) -> Vec<OptionGroup> {
        let tree = group_subjects(self.subjects_enriched());
        grouped_options(&tree, |s| SelectOption::new(s.subject.id, s.subject.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{client, MockTransport};
    use crate::shared::hierarchy::group_subjects;
    use serde_json::json;
    use std::rc::Rc;

    fn science_transport() -> MockTransport {
        MockTransport::default()
            .route("/programs", Ok(json!({ "programs": [{"id": 1, "name": "Science"}] })))
            .route("/courses", Ok(json!({ "data": [{"id": 10, "name": "Physics", "program_id": 1}] })))
            .route("/subjects", Ok(json!({ "subjects": [{"id": 100, "name": "Mechanics", "course_id": 10}] })))
            .route("/chapters", Ok(json!({ "chapters": [{"id": 1000, "subject_id": 100, "name": "Kinematics"}] })))
    }

    #[tokio::test]
    async fn test_load_and_enrich() {
        let transport = Rc::new(science_transport());
        let api = client(transport.clone());

        let cache = LookupCache::load(&api, LookupScope::Subjects).await.unwrap();

        assert_eq!(transport.calls(), 3);
        assert!(cache.chapters.is_empty());
        let tree = group_subjects(cache.subjects_enriched());
        let physics = tree.get("Science").and_then(|c| c.get("Physics")).unwrap();
        assert_eq!(physics[0].subject.id, 100);
    }

    #[tokio::test]
    async fn test_chapter_scope_loads_four_lists() {
        let transport = Rc::new(science_transport());
        let api = client(transport.clone());

        let cache = LookupCache::load(&api, LookupScope::Chapters).await.unwrap();

        assert_eq!(transport.calls(), 4);
        let chapters = cache.chapters_enriched();
        assert_eq!(chapters[0].subject_name, "Mechanics");
        assert_eq!(chapters[0].program_name, "Science");
    }

    #[tokio::test]
    async fn test_partial_failure_gives_empty_cache() {
        let transport = Rc::new(
            MockTransport::default()
                .route("/programs", Ok(json!({ "programs": [{"id": 1, "name": "Science"}] })))
                .route("/courses", Err(ApiError::Transport("connection reset".into())))
                .route("/subjects", Ok(json!({ "subjects": [{"id": 100, "name": "Mechanics", "course_id": 10}] }))),
        );
        let api = client(transport);

        assert!(LookupCache::load(&api, LookupScope::Subjects).await.is_err());
        let cache = LookupCache::load_or_empty(&api, LookupScope::Subjects).await;
        assert!(cache.is_empty());
        assert!(cache.subjects_enriched().is_empty());
    }

    #[tokio::test]
    async fn test_option_groups() {
        let api = client(Rc::new(science_transport()));

        let cache = LookupCache::load(&api, LookupScope::Subjects).await.unwrap();

        let courses = cache.course_options();
        assert_eq!(courses[0].label, "Science");
        assert_eq!(courses[0].options, vec![SelectOption::new(10, "Physics")]);
        let subjects = cache.subject_options();
        assert_eq!(subjects[0].label, "Science / Physics");
        assert_eq!(subjects[0].options, vec![SelectOption::new(100, "Mechanics")]);
    }

    #[test]
    fn test_empty_cache_has_no_options() {
        let cache = LookupCache::default();
        assert!(cache.course_options().is_empty());
        assert!(cache.subject_options().is_empty());
    }
}
