use super::model::{NAME, SUBJECT_ID, TITLE};
use super::view_model::ChapterDetailsViewModel;
use crate::shared::components::form_field::{FieldShell, FormActions, TextField};
use crate::shared::components::grouped_select::GroupedSelect;
use crate::shared::components::notification::Notification;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ChapterDetails(on_saved: Rc<dyn Fn(String)>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = ChapterDetailsViewModel::new();
    vm.load_lookups();
    let form = vm.form;
    let on_saved = StoredValue::new_local(on_saved);
    let on_cancel = StoredValue::new_local(on_cancel);

    view! {
        <div class="details-container chapter-details">
            <div class="details-header">
                <h3>"New chapter"</h3>
            </div>

            <Notification message=form.error />

            <div class="details-form">
                <TextField
                    label="Name"
                    required=true
                    value=form.value(NAME)
                    on_input=form.setter(NAME)
                    error=form.field_error(NAME)
                />
                <TextField label="Title" value=form.value(TITLE) on_input=form.setter(TITLE) />
                <FieldShell label="Subject" required=true error=form.field_error(SUBJECT_ID)>
                    <GroupedSelect
                        groups=vm.subject_groups
                        selected=form.id_value(SUBJECT_ID)
                        on_change=form.setter(SUBJECT_ID)
                        disabled=vm.lookups_loading
                    />
                </FieldShell>
            </div>

            <FormActions
                saving=form.saving
                on_save=Callback::new(move |_| vm.save_command(on_saved.get_value()))
                on_cancel=Callback::new(move |_| (on_cancel.get_value())(()))
                save_label="Create"
            />
        </div>
    }
}
