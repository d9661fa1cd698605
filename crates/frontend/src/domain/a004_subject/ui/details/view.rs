use super::model::{COURSE_ID, NAME, SHORT_DES, THUMBNAIL, TITLE};
use super::view_model::SubjectDetailsViewModel;
use crate::shared::components::file_field::FileField;
use crate::shared::components::form_field::{FieldShell, FormActions, TextField};
use crate::shared::components::grouped_select::GroupedSelect;
use crate::shared::components::notification::Notification;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn SubjectDetails(on_saved: Rc<dyn Fn(String)>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = SubjectDetailsViewModel::new();
    vm.load_lookups();
    let form = vm.form;
    let on_saved = StoredValue::new_local(on_saved);
    let on_cancel = StoredValue::new_local(on_cancel);

    view! {
        <div class="details-container subject-details">
            <div class="details-header">
                <h3>"New subject"</h3>
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
                <TextField
                    label="Short description"
                    multiline=true
                    value=form.value(SHORT_DES)
                    on_input=form.setter(SHORT_DES)
                />
                <FieldShell label="Course">
                    <GroupedSelect
                        groups=vm.course_groups
                        selected=form.id_value(COURSE_ID)
                        on_change=form.setter(COURSE_ID)
                        disabled=vm.lookups_loading
                        placeholder="No course"
                    />
                </FieldShell>
                <FileField label="Thumbnail" field=THUMBNAIL files=form.files accept="image/*" image=true />
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
