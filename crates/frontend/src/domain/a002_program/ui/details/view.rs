use super::model::{BOARD_ID, DESCRIPTION, NAME};
use super::view_model::ProgramDetailsViewModel;
use crate::shared::components::form_field::{FieldShell, FormActions, TextField};
use crate::shared::components::grouped_select::OptionSelect;
use crate::shared::components::notification::Notification;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ProgramDetails(on_saved: Rc<dyn Fn(String)>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = ProgramDetailsViewModel::new();
    vm.load_boards();
    let form = vm.form;
    let on_saved = StoredValue::new_local(on_saved);
    let on_cancel = StoredValue::new_local(on_cancel);

    view! {
        <div class="details-container program-details">
            <div class="details-header">
                <h3>"New program"</h3>
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
                <FieldShell label="Board" required=true error=form.field_error(BOARD_ID)>
                    <OptionSelect
                        options=vm.boards
                        selected=form.id_value(BOARD_ID)
                        on_change=form.setter(BOARD_ID)
                        loading=vm.boards_loading
                    />
                </FieldShell>
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
