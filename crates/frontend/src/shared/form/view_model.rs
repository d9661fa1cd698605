use super::{submit, FieldErrors, FileSlots, FormFields, FormSchema, STATUS_FIELD};
use crate::shared::api::ApiClient;
use contracts::domain::common::entity_id::parse_optional_id;
use contracts::domain::common::{Entity, EntityId};
use contracts::shared::envelope::entity_from_envelope;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::rc::Rc;

/// Reactive state of one entity form, bound to `submit`
///
/// Copy, so view closures can capture it freely. Files live in local
/// storage because browser `File` handles are not `Send`.
#[derive(Clone, Copy)]
pub struct FormViewModel {
    pub schema: FormSchema,
    pub fields: RwSignal<FormFields>,
    pub files: RwSignal<FileSlots, LocalStorage>,
    pub field_errors: RwSignal<FieldErrors>,
    /// Form-level error (server, network, missing token)
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl FormViewModel {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            fields: RwSignal::new(FormFields::new()),
            files: RwSignal::new_local(FileSlots::new()),
            field_errors: RwSignal::new(FieldErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn value(&self, name: &'static str) -> Signal<String> {
        let fields = self.fields;
        Signal::derive(move || fields.with(|f| f.get(name)))
    }

    /// Field holding a selected id; blank or malformed reads as none
    pub fn id_value(&self, name: &'static str) -> Signal<Option<EntityId>> {
        let fields = self.fields;
        Signal::derive(move || fields.with(|f| parse_optional_id(&f.get(name)).ok().flatten()))
    }

    /// Store a selected id as the field's text value
    pub fn set_id(&self, name: &'static str, id: Option<EntityId>) {
        let text = id.map(|id| id.to_string()).unwrap_or_default();
        if self.fields.with_untracked(|f| f.get(name) != text) {
            self.setter(name).run(text);
        }
    }

    /// Writes the field and drops its stale validation message
    pub fn setter(&self, name: &'static str) -> Callback<String> {
        let fields = self.fields;
        let field_errors = self.field_errors;
        Callback::new(move |value: String| {
            fields.update(|f| f.set(name, value));
            if field_errors.with_untracked(|e| e.contains_key(name)) {
                field_errors.update(|e| {
                    e.remove(name);
                });
            }
        })
    }

    pub fn field_error(&self, name: &'static str) -> Signal<Option<String>> {
        let field_errors = self.field_errors;
        Signal::derive(move || field_errors.with(|e| e.get(name).cloned()))
    }

    pub fn set_draft(&self, on: bool) {
        self.fields.update(|f| f.publish.set_draft(on));
        self.field_errors.update(|e| {
            e.remove(STATUS_FIELD);
        });
    }

    pub fn set_published(&self, on: bool) {
        self.fields.update(|f| f.publish.set_published(on));
        self.field_errors.update(|e| {
            e.remove(STATUS_FIELD);
        });
    }

    /// Back to an empty form
    pub fn reset(&self) {
        self.fields.set(FormFields::new());
        self.files.update(|f| f.clear());
        self.field_errors.set(FieldErrors::new());
        self.error.set(None);
    }

    /// Submit once; `on_saved` gets the confirmation text only after the
    /// server accepted the record
    pub fn save_command<T>(&self, on_saved: Rc<dyn Fn(String)>)
    where
        T: Entity + DeserializeOwned + 'static,
    {
        if self.saving.get_untracked() {
            return;
        }
        let vm = *self;
        let fields = self.fields.get_untracked();
        let files = self.files.with_untracked(|f| f.clone());

        vm.saving.set(true);
        vm.error.set(None);

        spawn_local(async move {
            let api = ApiClient::browser();
            let result = submit(&vm.schema, &fields, &files, &api).await;
            // the form may have been closed while the request was in flight
            if vm.saving.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(value) => {
                    vm.field_errors.set(FieldErrors::new());
                    (on_saved)(created_notice::<T>(&value));
                }
                Err(e) => {
                    vm.field_errors
                        .set(e.field_errors().cloned().unwrap_or_default());
                    vm.error.set(Some(e.user_message()));
                }
            }
        });
    }
}

fn created_notice<T: Entity + DeserializeOwned>(value: &serde_json::Value) -> String {
    match entity_from_envelope::<T>(value, T::singular_key()) {
        Ok(entity) => format!("{} \"{}\" saved", T::element_name(), entity.display_name()),
        Err(e) => {
            log::debug!("Saved, response not parsed: {}", e);
            format!("{} saved", T::element_name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_board::aggregate::Board;
    use serde_json::json;

    #[test]
    fn test_created_notice_uses_singular_key() {
        let value = json!({ "board": { "id": 3, "name": "CBSE" } });
        assert_eq!(created_notice::<Board>(&value), "Board \"CBSE\" saved");
    }

    #[test]
    fn test_created_notice_without_entity() {
        let value = json!({ "message": "ok" });
        assert_eq!(created_notice::<Board>(&value), "Board saved");
    }
}
