use contracts::domain::a002_program::aggregate::Program;
use contracts::domain::a003_course::aggregate::Course;
use contracts::domain::a004_subject::aggregate::Subject;
use contracts::domain::a005_chapter::aggregate::Chapter;
use contracts::domain::common::{Entity, EntityId};
use std::collections::HashMap;

pub const NO_COURSE: &str = "No Course Assigned";
pub const NO_PROGRAM: &str = "No Program";
pub const NO_SUBJECT: &str = "No Subject";

/// Id-indexed view over a flat list, built once per enrichment pass
pub struct Lookup<'a, T> {
    by_id: HashMap<EntityId, &'a T>,
}

impl<'a, T: Entity> Lookup<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            by_id: items.iter().map(|item| (item.id(), item)).collect(),
        }
    }

    pub fn get(&self, id: Option<EntityId>) -> Option<&'a T> {
        id.and_then(|id| self.by_id.get(&id).copied())
    }

    /// Display name of the referenced entity, or `sentinel` if it does not resolve
    pub fn label(&self, id: Option<EntityId>, sentinel: &str) -> String {
        self.get(id)
            .map(|item| item.display_name().to_string())
            .unwrap_or_else(|| sentinel.to_string())
    }
}

/// Placeholder labels for the parent and grandparent levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinels {
    pub parent: &'static str,
    pub grandparent: &'static str,
}

impl Sentinels {
    pub const SUBJECT: Sentinels = Sentinels {
        parent: NO_COURSE,
        grandparent: NO_PROGRAM,
    };
}

/// Label every record with its parent and grandparent names
///
/// Missing references are data conditions: an unresolved parent yields both
/// sentinels, an unresolved grandparent yields the grandparent sentinel.
/// Output has one entry per record, in input order.
pub fn enrich<R, P, G>(
    records: &[R],
    parents: &Lookup<'_, P>,
    grandparents: &Lookup<'_, G>,
    parent_id: impl Fn(&R) -> Option<EntityId>,
    grandparent_id: impl Fn(&P) -> Option<EntityId>,
    sentinels: Sentinels,
) -> Vec<(R, String, String)>
where
    R: Clone,
    P: Entity,
    G: Entity,
{
    records
        .iter()
        .map(|record| match parents.get(parent_id(record)) {
            Some(parent) => (
                record.clone(),
                parent.display_name().to_string(),
                grandparents.label(grandparent_id(parent), sentinels.grandparent),
            ),
            None => (
                record.clone(),
                sentinels.parent.to_string(),
                sentinels.grandparent.to_string(),
            ),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedCourse {
    pub course: Course,
    pub program_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedSubject {
    pub subject: Subject,
    pub course_name: String,
    pub program_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedChapter {
    pub chapter: Chapter,
    pub subject_name: String,
    pub subject_title: String,
    pub course_name: String,
    pub program_name: String,
}

pub fn enrich_courses(courses: &[Course], programs: &[Program]) -> Vec<EnrichedCourse> {
    let programs = Lookup::new(programs);
    courses
        .iter()
        .map(|course| EnrichedCourse {
            course: course.clone(),
            program_name: programs.label(course.program_id, NO_PROGRAM),
        })
        .collect()
}

pub fn enrich_subjects(
    subjects: &[Subject],
    courses: &[Course],
    programs: &[Program],
) -> Vec<EnrichedSubject> {
    let courses = Lookup::new(courses);
    let programs = Lookup::new(programs);
    enrich(
        subjects,
        &courses,
        &programs,
        |s| s.course_id,
        |c| c.program_id,
        Sentinels::SUBJECT,
    )
    .into_iter()
    .map(|(subject, course_name, program_name)| EnrichedSubject {
        subject,
        course_name,
        program_name,
    })
    .collect()
}

/// Chapters labelled with subject, course and program
///
/// Goes through the enriched subjects, so the course/program labels of a
/// chapter always agree with those of its subject.
pub fn enrich_chapters(
    chapters: &[Chapter],
    subjects: &[Subject],
    courses: &[Course],
    programs: &[Program],
) -> Vec<EnrichedChapter> {
    let enriched_subjects = enrich_subjects(subjects, courses, programs);
    let by_subject: HashMap<EntityId, &EnrichedSubject> = enriched_subjects
        .iter()
        .map(|s| (s.subject.id, s))
        .collect();

    chapters
        .iter()
        .map(|chapter| match by_subject.get(&chapter.subject_id) {
            Some(s) => EnrichedChapter {
                chapter: chapter.clone(),
                subject_name: s.subject.name.clone(),
                subject_title: s
                    .subject
                    .title
                    .clone()
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| s.subject.name.clone()),
                course_name: s.course_name.clone(),
                program_name: s.program_name.clone(),
            },
            None => EnrichedChapter {
                chapter: chapter.clone(),
                subject_name: NO_SUBJECT.to_string(),
                subject_title: NO_SUBJECT.to_string(),
                course_name: NO_COURSE.to_string(),
                program_name: NO_PROGRAM.to_string(),
            },
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_subject_resolves_course_and_program() {
        let programs = vec![program(1, "Science")];
        let courses = vec![course(10, "Physics", Some(1))];
        let subjects = vec![subject(100, "Mechanics", Some(10))];

        let enriched = enrich_subjects(&subjects, &courses, &programs);

        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].subject.id, 100);
        assert_eq!(enriched[0].course_name, "Physics");
        assert_eq!(enriched[0].program_name, "Science");
    }

    #[test]
    fn test_null_course_gives_sentinels() {
        let programs = vec![program(1, "Science")];
        let courses = vec![course(10, "Physics", Some(1))];
        let subjects = vec![subject(100, "Orphan", None)];

        let enriched = enrich_subjects(&subjects, &courses, &programs);

        assert_eq!(enriched[0].course_name, NO_COURSE);
        assert_eq!(enriched[0].program_name, NO_PROGRAM);
    }

    #[test]
    fn test_dangling_keys_degrade_per_level() {
        let programs = vec![program(1, "Science")];
        let courses = vec![
            course(10, "Physics", Some(99)),
            course(11, "Loose", None),
        ];
        let subjects = vec![
            subject(100, "A", Some(10)),
            subject(101, "B", Some(11)),
            subject(102, "C", Some(12345)),
        ];

        let enriched = enrich_subjects(&subjects, &courses, &programs);

        assert_eq!(enriched[0].course_name, "Physics");
        assert_eq!(enriched[0].program_name, NO_PROGRAM);
        assert_eq!(enriched[1].course_name, "Loose");
        assert_eq!(enriched[1].program_name, NO_PROGRAM);
        assert_eq!(enriched[2].course_name, NO_COURSE);
        assert_eq!(enriched[2].program_name, NO_PROGRAM);
    }

    #[test]
    fn test_preserves_order_and_ids() {
        let subjects: Vec<Subject> = (0..5)
            .rev()
            .map(|i| subject(i, &format!("S{}", i), None))
            .collect();

        let enriched = enrich_subjects(&subjects, &[], &[]);

        let ids: Vec<EntityId> = enriched.iter().map(|e| e.subject.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_rerun_is_identical() {
        let programs = vec![program(1, "Science")];
        let courses = vec![course(10, "Physics", Some(1))];
        let subjects = vec![subject(100, "Mechanics", Some(10)), subject(101, "Optics", None)];

        let first = enrich_subjects(&subjects, &courses, &programs);
        let second = enrich_subjects(&subjects, &courses, &programs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_chapters_inherit_subject_ancestry() {
        let programs = vec![program(1, "Science")];
        let courses = vec![course(10, "Physics", Some(1))];
        let mut mechanics = subject(100, "Mechanics", Some(10));
        mechanics.title = Some("Classical Mechanics".into());
        let subjects = vec![mechanics, subject(101, "Optics", Some(10))];
        let chapters = vec![
            chapter(1000, 100, "Kinematics"),
            chapter(1001, 101, "Lenses"),
            chapter(1002, 555, "Lost"),
        ];

        let enriched = enrich_chapters(&chapters, &subjects, &courses, &programs);

        assert_eq!(enriched[0].subject_name, "Mechanics");
        assert_eq!(enriched[0].subject_title, "Classical Mechanics");
        assert_eq!(enriched[0].course_name, "Physics");
        assert_eq!(enriched[0].program_name, "Science");
        assert_eq!(enriched[1].subject_title, "Optics");
        assert_eq!(enriched[2].subject_name, NO_SUBJECT);
        assert_eq!(enriched[2].course_name, NO_COURSE);
        assert_eq!(enriched[2].program_name, NO_PROGRAM);
    }

    #[test]
    fn test_courses_get_program_label() {
        let programs = vec![program(1, "Science")];
        let courses = vec![course(10, "Physics", Some(1)), course(11, "Art", None)];

        let enriched = enrich_courses(&courses, &programs);

        assert_eq!(enriched[0].program_name, "Science");
        assert_eq!(enriched[1].program_name, NO_PROGRAM);
    }
}
