use super::model::{AUTHOR, FILE, SUBJECT_ID, TITLE};
use super::view_model::BookReferenceDetailsViewModel;
use crate::shared::components::file_field::FileField;
use crate::shared::components::form_field::{FieldShell, FormActions, TextField};
use crate::shared::components::grouped_select::GroupedSelect;
use crate::shared::components::notification::Notification;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn BookReferenceDetails(on_saved: Rc<dyn Fn(String)>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = BookReferenceDetailsViewModel::new();
    vm.load_lookups();
    let form = vm.form;
    let on_saved = StoredValue::new_local(on_saved);
    let on_cancel = StoredValue::new_local(on_cancel);

    view! {
        <div class="details-container book-reference-details">
            <div class="details-header">
                <h3>"New book reference"</h3>
            </div>

            <Notification message=form.error />

            <div class="details-form">
                <TextField
                    label="Title"
                    required=true
                    value=form.value(TITLE)
                    on_input=form.setter(TITLE)
                    error=form.field_error(TITLE)
                />
                <TextField label="Author" value=form.value(AUTHOR) on_input=form.setter(AUTHOR) />
                <FieldShell label="Subject" required=true error=form.field_error(SUBJECT_ID)>
                    <GroupedSelect
                        groups=vm.subject_groups
                        selected=form.id_value(SUBJECT_ID)
                        on_change=form.setter(SUBJECT_ID)
                        disabled=vm.lookups_loading
                    />
                </FieldShell>
                <FileField
                    label="PDF file"
                    field=FILE
                    files=form.files
                    accept="application/pdf"
                    required=true
                    error=form.field_error(FILE)
                />
            </div>

            <FormActions
                saving=form.saving
                on_save=Callback::new(move |_| vm.save_command(on_saved.get_value()))
                on_cancel=Callback::new(move |_| (on_cancel.get_value())(()))
                save_label="Upload"
            />
        </div>
    }
}
