use super::model::{ANSWER, CASCADE_LABELS, IMAGE, OPTIONS, QUESTION, TOPIC_ID};
use super::view_model::QuestionDetailsViewModel;
use crate::shared::components::cascade_select::CascadeSelect;
use crate::shared::components::file_field::FileField;
use crate::shared::components::form_field::{FieldShell, FormActions, TextField};
use crate::shared::components::notification::Notification;
use crate::shared::form::STATUS_FIELD;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn QuestionDetails(on_saved: Rc<dyn Fn(String)>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = QuestionDetailsViewModel::new();
    vm.start();
    let form = vm.form;
    let on_saved = StoredValue::new_local(on_saved);
    let on_cancel = StoredValue::new_local(on_cancel);
    let answer = form.value(ANSWER);
    let on_answer = form.setter(ANSWER);

    view! {
        <div class="details-container question-details">
            <div class="details-header">
                <h3>"New question"</h3>
            </div>

            <Notification message=form.error />

            <div class="details-form">
                <CascadeSelect
                    cascade=vm.cascade
                    labels=CASCADE_LABELS
                    required=true
                    error=form.field_error(TOPIC_ID)
                />
                <TextField
                    label="Question"
                    required=true
                    multiline=true
                    value=form.value(QUESTION)
                    on_input=form.setter(QUESTION)
                    error=form.field_error(QUESTION)
                />
                {OPTIONS.iter().map(|&(field, label, _)| view! {
                    <TextField label=label value=form.value(field) on_input=form.setter(field) />
                }).collect_view()}

                <FieldShell label="Correct answer" required=true error=form.field_error(ANSWER)>
                    <select
                        class="form__select"
                        prop:value=move || answer.get()
                        on:change=move |ev| on_answer.run(event_target_value(&ev))
                    >
                        <option value="">"Select..."</option>
                        {OPTIONS.iter().map(|&(_, label, value)| view! {
                            <option value=value selected=move || answer.get() == value>{label}</option>
                        }).collect_view()}
                    </select>
                </FieldShell>

                <FieldShell label="Status" error=form.field_error(STATUS_FIELD)>
                    <div class="form__checkboxes">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || vm.is_draft()
                                on:change=move |ev| vm.form.set_draft(event_target_checked(&ev))
                            />
                            "Draft"
                        </label>
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || vm.is_published()
                                on:change=move |ev| vm.form.set_published(event_target_checked(&ev))
                            />
                            "Published"
                        </label>
                    </div>
                </FieldShell>

                <FileField label="Image" field=IMAGE files=form.files accept="image/*" image=true />
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
