use crate::shared::hierarchy::{OptionGroup, SelectOption};
use contracts::domain::common::EntityId;
use leptos::prelude::*;

/// `<select>` with one `<optgroup>` per hierarchy branch.
#[component]
pub fn GroupedSelect(
    #[prop(into)] groups: Signal<Vec<OptionGroup>>,
    #[prop(into)] selected: Signal<Option<EntityId>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() { "Select..." } else { placeholder };

    view! {
        <select
            class="form__select"
            disabled=move || disabled.get()
            prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {move || groups.get().into_iter().map(|group| view! {
                <optgroup label=group.label>
                    {group.options.into_iter().map(|opt| {
                        let value = opt.value;
                        view! {
                            <option
                                value=value.to_string()
                                selected=move || selected.get() == Some(value)
                            >
                                {opt.label}
                            </option>
                        }
                    }).collect_view()}
                </optgroup>
            }).collect_view()}
        </select>
    }
}

/// Flat `<select>` over already-loaded options.
#[component]
pub fn OptionSelect(
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] selected: Signal<Option<EntityId>>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, optional)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <select
            class="form__select"
            disabled=move || loading.get()
            prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{move || if loading.get() { "Loading..." } else { "Select..." }}</option>
            {move || options.get().into_iter().map(|opt| {
                let value = opt.value;
                view! {
                    <option value=value.to_string() selected=move || selected.get() == Some(value)>
                        {opt.label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
