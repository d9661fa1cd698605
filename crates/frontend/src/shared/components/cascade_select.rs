use super::form_field::FieldShell;
use crate::shared::cascade::CascadeHandle;
use leptos::prelude::*;

/// One `<select>` per cascade level; a level stays disabled until its
/// parent is chosen and its options have arrived.
#[component]
pub fn CascadeSelect(
    cascade: CascadeHandle,
    /// Label per level, outermost first
    labels: &'static [&'static str],
    /// Field-scoped error shown under the deepest level
    #[prop(into, optional)]
    error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let last = cascade.depth().saturating_sub(1);

    (0..cascade.depth())
        .map(|level| {
            let label = labels.get(level).copied().unwrap_or("");
            let level_error = Signal::derive(move || if level == last { error.get() } else { None });
            let disabled = move || {
                cascade.is_loading(level) || (level > 0 && cascade.selected(level - 1).is_none())
            };
            let placeholder = move || {
                if cascade.is_loading(level) {
                    "Loading..."
                } else if level > 0 && cascade.selected(level - 1).is_none() {
                    "Select the level above first"
                } else {
                    "Select..."
                }
            };

            view! {
                <FieldShell label=label required=required error=level_error>
                    <select
                        class="form__select"
                        disabled=disabled
                        prop:value=move || {
                            cascade.selected(level).map(|id| id.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| cascade.select_raw(level, &event_target_value(&ev))
                    >
                        <option value="">{placeholder}</option>
                        {move || cascade.options(level).into_iter().map(|opt| {
                            let value = opt.value;
                            view! {
                                <option
                                    value=value.to_string()
                                    selected=move || cascade.selected(level) == Some(value)
                                >
                                    {opt.label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </FieldShell>
            }
        })
        .collect_view()
}
