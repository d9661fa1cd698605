use super::form_field::FieldShell;
use crate::shared::api::Attachment;
use crate::shared::form::{BrowserObjectUrls, FilePreview, FileSlots};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// File picker bound to one slot of a form's `FileSlots`.
///
/// Holds the object URL of the preview and releases it when the file is
/// replaced, removed, or the component goes away.
#[component]
pub fn FileField(
    label: &'static str,
    /// Slot name in `FileSlots` and the multipart part name
    field: &'static str,
    files: RwSignal<FileSlots, LocalStorage>,
    /// `accept` attribute, e.g. "image/*" or "application/pdf"
    accept: &'static str,
    /// Render the preview as an image instead of a link
    #[prop(optional)]
    image: bool,
    #[prop(optional)] required: bool,
    #[prop(into, optional)] error: Signal<Option<String>>,
) -> impl IntoView {
    let preview = StoredValue::new_local(FilePreview::new(BrowserObjectUrls));
    let (preview_url, set_preview_url) = signal(None::<String>);

    let input_ref = NodeRef::<leptos::html::Input>::new();

    // changes only when this slot gets a different file
    let revision = Memo::new(move |_| files.with(|f| f.revision(field)));
    let current = Memo::new(move |_| {
        revision.track();
        files.with_untracked(|f| f.get(field).map(|a| a.file_name.clone()))
    });

    Effect::new(move |_| {
        revision.track();
        let url = files.with_untracked(|f| {
            let attachment = f.get(field);
            preview
                .try_update_value(|p| p.replace(attachment))
                .flatten()
        });
        set_preview_url.set(url);
    });

    on_cleanup(move || {
        preview.try_update_value(|p| p.release());
    });

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let picked = input
            .files()
            .and_then(|list| list.get(0))
            .map(Attachment::from_file);
        if let Some(a) = &picked {
            log::debug!("{}: picked {} ({} bytes)", field, a.file_name, a.size);
        }
        files.update(|f| f.set(field, picked));
    };

    let remove = move |_| {
        // otherwise picking the same file again fires no change event
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
        files.update(|f| f.set(field, None));
    };

    view! {
        <FieldShell label=label required=required error=error>
            <input
                type="file"
                class="form__file"
                accept=accept
                node_ref=input_ref
                on:change=on_change
            />
            {move || {
                let name = current.get()?;
                let url = preview_url.get();
                Some(view! {
                    <div class="file-preview">
                        {match (image, url) {
                            (true, Some(url)) => view! {
                                <img class="file-preview__image" src=url alt=name.clone() />
                            }.into_any(),
                            (false, Some(url)) => view! {
                                <a class="file-preview__link" href=url target="_blank">{name.clone()}</a>
                            }.into_any(),
                            (_, None) => view! { <span>{name.clone()}</span> }.into_any(),
                        }}
                        <button class="file-preview__remove" title="Remove" on:click=remove>
                            {icon("x")}
                        </button>
                    </div>
                })
            }}
        </FieldShell>
    }
}

#[cfg(test)]
mod tests {
    /// Details forms that carry a file input
    const FORMS_WITH_FILES: &[(&str, &str)] = &[
        ("a004_subject", include_str!("../../domain/a004_subject/ui/details/view.rs")),
        ("a006_topic", include_str!("../../domain/a006_topic/ui/details/view.rs")),
        ("a007_question", include_str!("../../domain/a007_question/ui/details/view.rs")),
        ("a008_book_reference", include_str!("../../domain/a008_book_reference/ui/details/view.rs")),
    ];

    // `slot=` is reserved by `view!` and makes the macro drop the component
    #[test]
    fn test_file_inputs_are_bound_by_field_name() {
        for (form, source) in FORMS_WITH_FILES {
            let start = source
                .find("<FileField")
                .unwrap_or_else(|| panic!("{} renders no FileField", form));
            let element = &source[start..];
            let element = &element[..element.find("/>").expect("FileField is self-closing")];

            assert!(
                element.split_whitespace().any(|attr| attr.starts_with("field=")),
                "{}: FileField without field=",
                form
            );
            assert!(
                !element.split_whitespace().any(|attr| attr.starts_with("slot=")),
                "{}: FileField bound with slot=",
                form
            );
        }
    }
}
