use crate::shared::icons::icon;
use leptos::prelude::*;

/// Shown instead of a value that failed to load
pub const MISSING_VALUE: &str = "—";

fn format_thousands(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result
}

pub fn format_count(value: Option<usize>) -> String {
    value.map(format_thousands).unwrap_or_else(|| MISSING_VALUE.to_string())
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// None = failed to load
    #[prop(into)]
    value: Signal<Option<usize>>,
    #[prop(into)]
    loading: Signal<bool>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let class = move || {
        if loading.get() {
            "stat-card stat-card--loading"
        } else if value.get().is_none() {
            "stat-card stat-card--error"
        } else {
            "stat-card"
        }
    };

    let formatted = move || {
        if loading.get() {
            "…".to_string()
        } else {
            format_count(value.get())
        }
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(7)), "7");
        assert_eq!(format_count(Some(1234567)), "1\u{00a0}234\u{00a0}567");
        assert_eq!(format_count(Some(100)), "100");
        assert_eq!(format_count(None), MISSING_VALUE);
    }
}
