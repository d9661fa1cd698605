use super::model::{CASCADE_LABELS, NAME, PROGRAM_ID};
use super::view_model::CourseDetailsViewModel;
use crate::shared::components::cascade_select::CascadeSelect;
use crate::shared::components::form_field::{FormActions, TextField};
use crate::shared::components::notification::Notification;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn CourseDetails(on_saved: Rc<dyn Fn(String)>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = CourseDetailsViewModel::new();
    vm.start();
    let form = vm.form;
    let on_saved = StoredValue::new_local(on_saved);
    let on_cancel = StoredValue::new_local(on_cancel);

    view! {
        <div class="details-container course-details">
            <div class="details-header">
                <h3>"New course"</h3>
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
                <CascadeSelect
                    cascade=vm.cascade
                    labels=CASCADE_LABELS
                    required=true
                    error=form.field_error(PROGRAM_ID)
                />
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
