//! Registry of pages reachable from the sidebar

pub const DEFAULT_PAGE: &str = "d400_overview";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub admin_only: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub pages: &'static [PageEntry],
}

const fn page(key: &'static str, label: &'static str, icon: &'static str) -> PageEntry {
    PageEntry {
        key,
        label,
        icon,
        admin_only: false,
    }
}

pub const MENU: &[MenuGroup] = &[
    MenuGroup {
        id: "dashboards",
        label: "Dashboards",
        pages: &[page("d400_overview", "Overview", "dashboard")],
    },
    MenuGroup {
        id: "catalog",
        label: "Catalog",
        pages: &[
            page("a001_board", "Boards", "board"),
            page("a002_program", "Programs", "program"),
            page("a003_course", "Courses", "course"),
            page("a004_subject", "Subjects", "subject"),
            page("a005_chapter", "Chapters", "chapter"),
            page("a006_topic", "Topics", "topic"),
            page("a007_question", "Questions", "question"),
            page("a008_book_reference", "Book references", "book"),
        ],
    },
    MenuGroup {
        id: "settings",
        label: "Settings",
        pages: &[PageEntry {
            key: "sys_users",
            label: "Users",
            icon: "users",
            admin_only: true,
        }],
    },
];

pub fn find_page(key: &str) -> Option<&'static PageEntry> {
    MENU.iter()
        .flat_map(|group| group.pages.iter())
        .find(|page| page.key == key)
}

pub fn is_known_page(key: &str) -> bool {
    find_page(key).is_some()
}

pub fn page_label(key: &str) -> &'static str {
    find_page(key).map(|p| p.label).unwrap_or("Unknown page")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: Vec<&str> = MENU
            .iter()
            .flat_map(|g| g.pages.iter().map(|p| p.key))
            .collect();
        let unique: HashSet<&str> = keys.iter().copied().collect();
        assert_eq!(keys.len(), unique.len());
    }

    #[test]
    fn test_default_page_is_registered() {
        assert!(is_known_page(DEFAULT_PAGE));
        assert_eq!(page_label("a008_book_reference"), "Book references");
        assert_eq!(page_label("nope"), "Unknown page");
    }
}
