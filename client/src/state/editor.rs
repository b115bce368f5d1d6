//! Create/edit modal state for the generic CRUD screen.

use portal::form::{self, FieldError, FormValues};
use portal::{EntitySchema, Record, RecordId};
use serde_json::{Map, Value};

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(RecordId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    pub mode: EditorMode,
    pub values: FormValues,
    pub errors: Vec<FieldError>,
}

impl EditorState {
    pub fn create(schema: &EntitySchema) -> Self {
        Self { mode: EditorMode::Create, values: form::blank(schema), errors: Vec::new() }
    }

    /// Rows without an id cannot be written back, so they get no editor.
    pub fn edit(schema: &EntitySchema, record: &Record) -> Option<Self> {
        let id = record.id()?;
        Some(Self { mode: EditorMode::Edit(id), values: form::prefill(schema, record), errors: Vec::new() })
    }

    pub fn title(&self, schema: &EntitySchema) -> String {
        match self.mode {
            EditorMode::Create => format!("Add {}", schema.singular),
            EditorMode::Edit(_) => format!("Edit {}", schema.singular),
        }
    }

    pub fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    /// Editing a field clears its stale error.
    pub fn set_value(&mut self, field: &str, value: String) {
        self.values.insert(field.to_owned(), value);
        self.errors.retain(|e| e.field != field);
    }

    pub fn error_for(&self, field: &str) -> Option<String> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message.clone())
    }

    /// Validated row to send, or `None` with `errors` filled in.
    pub fn payload(&mut self, schema: &EntitySchema) -> Option<Map<String, Value>> {
        match form::validate(schema, &self.values) {
            Ok(row) => {
                self.errors.clear();
                Some(row)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}
