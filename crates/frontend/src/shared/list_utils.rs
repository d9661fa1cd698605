//! Search, sorting and paging for table lists.
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Filters shorter than this are ignored.
pub const MIN_SEARCH_LEN: usize = 3;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Records that can be matched against a free-text search.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Records that can be ordered by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// True when the filter is long enough to narrow the list.
pub fn is_filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_SEARCH_LEN
}

/// Case-insensitive substring test shared by `Searchable` impls.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !is_filter_active(filter) {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Number of pages for `total` rows; an empty list still has one page.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Rows of the given 0-based page. Out-of-range pages are empty.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Debounced search box with a clear button.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Search (min. {} characters)...", MIN_SEARCH_LEN)
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // dropping a Timeout cancels it, so replacing the previous one is enough
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class:search-input__field--active=move || is_filter_active(&value.get())
                class="search-input__field"
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Indicator for a sortable column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    match (current_field == field, ascending) {
        (true, true) => " ▲",
        (true, false) => " ▼",
        _ => " ⇅",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, i32);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.0, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "n" => self.1.cmp(&other.1),
                _ => self.0.cmp(other.0),
            }
        }
    }

    #[test]
    fn test_short_filter_is_ignored() {
        let rows = vec![Row("alpha", 1), Row("beta", 2)];
        assert_eq!(filter_list(rows.clone(), "al").len(), 2);
        assert_eq!(filter_list(rows, "ALP"), vec![Row("alpha", 1)]);
    }

    #[test]
    fn test_sort_direction() {
        let mut rows = vec![Row("b", 1), Row("a", 3), Row("c", 2)];
        sort_list(&mut rows, "n", false);
        assert_eq!(rows.iter().map(|r| r.1).collect::<Vec<_>>(), vec![3, 2, 1]);
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].0, "a");
    }

    #[test]
    fn test_paging() {
        let items: Vec<i32> = (0..25).collect();
        assert_eq!(total_pages(items.len(), 10), 3);
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(page_slice(&items, 2, 10), vec![20, 21, 22, 23, 24]);
        assert!(page_slice(&items, 3, 10).is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "email", true), " ⇅");
    }
}
