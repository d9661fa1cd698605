use leptos::prelude::*;

/// Labelled input bound to one named entry of a form's field map.
///
/// `value`/`on_input` are supplied by the view model so the component
/// stays unaware of the form type.
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, optional)] error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                class="form__textarea"
                rows="3"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                class="form__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <FieldShell label=label required=required error=error>
            {input}
        </FieldShell>
    }
}

/// Label, required marker and field-scoped error around any control.
#[component]
pub fn FieldShell(
    label: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into, optional)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group" class:form__group--invalid=move || error.with(|e| e.is_some())>
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {children()}
            {move || error.get().map(|msg| view! { <div class="form__error">{msg}</div> })}
        </div>
    }
}

/// Save / cancel buttons at the bottom of a details form.
#[component]
pub fn FormActions(
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional)] save_label: &'static str,
) -> impl IntoView {
    let save_label = if save_label.is_empty() { "Save" } else { save_label };

    view! {
        <div class="details-actions">
            <button
                class="btn btn-primary"
                disabled=move || saving.get()
                on:click=move |_| on_save.run(())
            >
                {crate::shared::icons::icon("save")}
                {move || if saving.get() { "Saving..." } else { save_label }}
            </button>
            <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                {crate::shared::icons::icon("cancel")}
                "Cancel"
            </button>
        </div>
    }
}
