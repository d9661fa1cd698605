use crate::shared::list_utils::{filter_list, page_slice, sort_list, total_pages};
use contracts::system::users::User;
use leptos::prelude::*;

pub const DEFAULT_PAGE_SIZE: usize = 25;

#[derive(Clone, Debug)]
pub struct UsersListState {
    /// Current page after filter, sort and paging
    pub items: Vec<User>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

impl UsersListState {
    /// Rebuild the visible page from the full list
    pub fn refresh(&mut self, all: &[User]) {
        let mut data = filter_list(all.to_vec(), &self.search_query);
        sort_list(&mut data, &self.sort_field, self.sort_ascending);
        self.total_count = data.len();
        self.total_pages = total_pages(self.total_count, self.page_size);
        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
        self.items = page_slice(&data, self.page, self.page_size);
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str, email: &str) -> User {
        User {
            id,
            name: name.into(),
            email: email.into(),
            phone: None,
            role: None,
            is_active: true,
            created_at: None,
        }
    }

    fn users() -> Vec<User> {
        (1..=30)
            .map(|i| user(i, &format!("User {:02}", i), &format!("u{}@school.org", i)))
            .collect()
    }

    #[test]
    fn test_refresh_pages() {
        let mut state = UsersListState::default();
        state.refresh(&users());

        assert_eq!(state.total_count, 30);
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.items.len(), DEFAULT_PAGE_SIZE);

        state.page = 1;
        state.refresh(&users());
        assert_eq!(state.items.len(), 5);
    }

    #[test]
    fn test_search_resets_out_of_range_page() {
        let mut state = UsersListState {
            page: 1,
            search_query: "User 0".into(),
            ..UsersListState::default()
        };
        state.refresh(&users());

        assert_eq!(state.total_count, 9);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_sort_descending_by_email() {
        let mut state = UsersListState {
            sort_field: "email".into(),
            sort_ascending: false,
            ..UsersListState::default()
        };
        state.refresh(&[user(1, "A", "a@x.org"), user(2, "B", "b@x.org")]);

        assert_eq!(state.items[0].id, 2);
    }
}
