use super::enrich::{EnrichedChapter, EnrichedCourse, EnrichedSubject};
use super::OrderedGroups;
use contracts::domain::common::EntityId;

/// program → course → subjects
pub type SubjectTree = OrderedGroups<OrderedGroups<Vec<EnrichedSubject>>>;
/// program → course → subject → chapters
pub type ChapterTree = OrderedGroups<OrderedGroups<OrderedGroups<Vec<EnrichedChapter>>>>;
/// program → courses
pub type CourseTree = OrderedGroups<Vec<EnrichedCourse>>;

/// Fold records left-to-right into buckets keyed by `path`
fn group_two<R>(records: Vec<R>, path: impl Fn(&R) -> (String, String)) -> OrderedGroups<OrderedGroups<Vec<R>>> {
    let mut tree = OrderedGroups::new();
    for record in records {
        let (outer, inner) = path(&record);
        tree.entry_or_insert_with(&outer, OrderedGroups::new)
            .entry_or_insert_with(&inner, Vec::new)
            .push(record);
    }
    tree
}

pub fn group_courses(records: Vec<EnrichedCourse>) -> CourseTree {
    let mut tree = OrderedGroups::new();
    for record in records {
        let key = record.program_name.clone();
        tree.entry_or_insert_with(&key, Vec::new).push(record);
    }
    tree
}

pub fn group_subjects(records: Vec<EnrichedSubject>) -> SubjectTree {
    group_two(records, |r| (r.program_name.clone(), r.course_name.clone()))
}

pub fn group_chapters(records: Vec<EnrichedChapter>) -> ChapterTree {
    let mut tree = OrderedGroups::new();
    for record in records {
        let program = record.program_name.clone();
        let course = record.course_name.clone();
        let subject = record.subject_name.clone();
        tree.entry_or_insert_with(&program, OrderedGroups::new)
            .entry_or_insert_with(&course, OrderedGroups::new)
            .entry_or_insert_with(&subject, Vec::new)
            .push(record);
    }
    tree
}

/// Leaves of a subject tree in tree order
pub fn flatten_subjects(tree: &SubjectTree) -> Vec<&EnrichedSubject> {
    tree.iter()
        .flat_map(|(_, courses)| courses.iter())
        .flat_map(|(_, items)| items.iter())
        .collect()
}

/// Leaves of a chapter tree in tree order
pub fn flatten_chapters(tree: &ChapterTree) -> Vec<&EnrichedChapter> {
    tree.iter()
        .flat_map(|(_, courses)| courses.iter())
        .flat_map(|(_, subjects)| subjects.iter())
        .flat_map(|(_, items)| items.iter())
        .collect()
}

/// One `<option>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: EntityId,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: EntityId, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// One `<optgroup>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<SelectOption>,
}

/// Flatten a two-level tree into `<optgroup label="Outer / Inner">` groups
pub fn grouped_options<R>(
    tree: &OrderedGroups<OrderedGroups<Vec<R>>>,
    option: impl Fn(&R) -> SelectOption,
) -> Vec<OptionGroup> {
    tree.iter()
        .flat_map(|(outer, inner)| {
            inner.iter().map(move |(label, items)| (outer, label, items))
        })
        .map(|(outer, inner, items)| OptionGroup {
            label: format!("{} / {}", outer, inner),
            options: items.iter().map(&option).collect(),
        })
        .collect()
}

/// One `<optgroup>` per key of a single-level tree (e.g. courses by program)
pub fn flat_grouped_options<R>(
    tree: &OrderedGroups<Vec<R>>,
    option: impl Fn(&R) -> SelectOption,
) -> Vec<OptionGroup> {
    tree.iter()
        .map(|(label, items)| OptionGroup {
            label: label.to_string(),
            options: items.iter().map(&option).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::enrich::fixtures::*;
    use super::super::enrich::{enrich_chapters, enrich_courses, enrich_subjects, NO_COURSE, NO_PROGRAM};
    use super::*;

    #[test]
    fn test_single_subject_tree() {
        let programs = vec![program(1, "Science")];
        let courses = vec![course(10, "Physics", Some(1))];
        let subjects = vec![subject(100, "Mechanics", Some(10))];

        let tree = group_subjects(enrich_subjects(&subjects, &courses, &programs));

        assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["Science"]);
        let physics = tree.get("Science").and_then(|c| c.get("Physics")).unwrap();
        assert_eq!(physics.len(), 1);
        assert_eq!(physics[0].subject.id, 100);
    }

    #[test]
    fn test_empty_input_gives_empty_tree() {
        assert!(group_subjects(Vec::new()).is_empty());
        assert!(group_chapters(Vec::new()).is_empty());
        assert!(group_courses(Vec::new()).is_empty());
    }

    #[test]
    fn test_first_seen_key_order_and_arrival_order() {
        let programs = vec![program(1, "Science"), program(2, "Arts")];
        let courses = vec![course(10, "Physics", Some(1)), course(20, "Music", Some(2))];
        let subjects = vec![
            subject(1, "Zeta", Some(20)),
            subject(2, "Alpha", Some(10)),
            subject(3, "Beta", Some(20)),
            subject(4, "Unassigned", None),
            subject(5, "Gamma", Some(10)),
        ];

        let tree = group_subjects(enrich_subjects(&subjects, &courses, &programs));

        assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["Arts", "Science", NO_PROGRAM]);
        let music: Vec<_> = tree.get("Arts").unwrap().get("Music").unwrap().iter().map(|r| r.subject.id).collect();
        assert_eq!(music, vec![1, 3]);
        let physics: Vec<_> = tree.get("Science").unwrap().get("Physics").unwrap().iter().map(|r| r.subject.id).collect();
        assert_eq!(physics, vec![2, 5]);
        assert!(tree.get(NO_PROGRAM).unwrap().get(NO_COURSE).is_some());
    }

    #[test]
    fn test_flatten_round_trip_keeps_every_record() {
        let programs = vec![program(1, "Science"), program(2, "Arts")];
        let courses = vec![course(10, "Physics", Some(1)), course(20, "Music", Some(2))];
        let subjects: Vec<_> = (0..12)
            .map(|i| subject(i, &format!("S{}", i), [Some(10), Some(20), None][i as usize % 3]))
            .collect();

        let enriched = enrich_subjects(&subjects, &courses, &programs);
        let tree = group_subjects(enriched.clone());
        let flat = flatten_subjects(&tree);

        assert_eq!(flat.len(), enriched.len());
        let mut ids: Vec<_> = flat.iter().map(|r| r.subject.id).collect();
        ids.sort();
        assert_eq!(ids, (0..12).collect::<Vec<_>>());
        // each bucket keeps source order
        for (_, courses) in tree.iter() {
            for (_, items) in courses.iter() {
                assert!(items.windows(2).all(|w| w[0].subject.id < w[1].subject.id));
            }
        }
    }

    #[test]
    fn test_chapter_tree_has_subject_level() {
        let programs = vec![program(1, "Science")];
        let courses = vec![course(10, "Physics", Some(1))];
        let subjects = vec![subject(100, "Mechanics", Some(10)), subject(101, "Optics", Some(10))];
        let chapters = vec![
            chapter(1, 101, "Lenses"),
            chapter(2, 100, "Kinematics"),
            chapter(3, 101, "Mirrors"),
        ];

        let tree = group_chapters(enrich_chapters(&chapters, &subjects, &courses, &programs));
        let physics = tree.get("Science").unwrap().get("Physics").unwrap();

        assert_eq!(physics.keys().collect::<Vec<_>>(), vec!["Optics", "Mechanics"]);
        assert_eq!(physics.get("Optics").unwrap().len(), 2);
        assert_eq!(flatten_chapters(&tree).len(), 3);
    }

    #[test]
    fn test_grouped_options_labels() {
        let programs = vec![program(1, "Science")];
        let courses = vec![course(10, "Physics", Some(1)), course(11, "Chemistry", Some(1))];
        let subjects = vec![subject(100, "Mechanics", Some(10)), subject(200, "Organic", Some(11))];

        let tree = group_subjects(enrich_subjects(&subjects, &courses, &programs));
        let groups = grouped_options(&tree, |r| SelectOption::new(r.subject.id, r.subject.name.clone()));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Science / Physics");
        assert_eq!(groups[0].options, vec![SelectOption::new(100, "Mechanics")]);
        assert_eq!(groups[1].label, "Science / Chemistry");
    }

    #[test]
    fn test_courses_grouped_by_program() {
        let programs = vec![program(1, "Science")];
        let courses = vec![course(10, "Physics", Some(1)), course(11, "Free", None)];

        let tree = group_courses(enrich_courses(&courses, &programs));

        assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["Science", NO_PROGRAM]);
    }

    #[test]
    fn test_course_options_by_program() {
        let programs = vec![program(1, "Science"), program(2, "Arts")];
        let courses = vec![
            course(10, "Physics", Some(1)),
            course(20, "Music", Some(2)),
            course(11, "Chemistry", Some(1)),
        ];

        let tree = group_courses(enrich_courses(&courses, &programs));
        let groups = flat_grouped_options(&tree, |r| SelectOption::new(r.course.id, r.course.name.clone()));

        assert_eq!(groups[0].label, "Science");
        assert_eq!(
            groups[0].options,
            vec![SelectOption::new(10, "Physics"), SelectOption::new(11, "Chemistry")]
        );
        assert_eq!(groups[1].label, "Arts");
    }
}
