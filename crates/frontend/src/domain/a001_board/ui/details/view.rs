use super::model::{DESCRIPTION, NAME};
use super::view_model::BoardDetailsViewModel;
use crate::shared::components::form_field::{FormActions, TextField};
use crate::shared::components::notification::Notification;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn BoardDetails(on_saved: Rc<dyn Fn(String)>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = BoardDetailsViewModel::new();
    let form = vm.form;
    let on_saved = StoredValue::new_local(on_saved);
    let on_cancel = StoredValue::new_local(on_cancel);

    view! {
        <div class="details-container board-details">
            <div class="details-header">
                <h3>"New board"</h3>
            </div>

            <Notification message=form.error />

            <div class="details-form">
                <TextField
                    label="Name"
                    required=true
                    value=form.value(NAME)
                    on_input=form.setter(NAME)
                    error=form.field_error(NAME)
                    placeholder="e.g. CBSE"
                />
                <TextField
                    label="Description"
                    multiline=true
                    value=form.value(DESCRIPTION)
                    on_input=form.setter(DESCRIPTION)
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
