//! Schema-driven form values and validation.
//!
//! Forms hold every field as the string the user typed. [`validate`] turns
//! them into the JSON row sent to the backend, or into per-field errors.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

use crate::record::Record;
use crate::schema::{EntitySchema, FieldKind, FieldSpec};

pub type FormValues = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: String) -> Self {
        Self { field: field.to_owned(), message }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Values for a fresh create form. Required selects start on their first option.
#[must_use]
pub fn blank(schema: &EntitySchema) -> FormValues {
    schema
        .fields
        .iter()
        .map(|spec| {
            let initial = match spec.kind {
                FieldKind::Select(options) if spec.required => options.first().map_or("", |o| o.value),
                _ => "",
            };
            (spec.name.to_owned(), initial.to_owned())
        })
        .collect()
}

/// Values for an edit form, taken from the existing record.
#[must_use]
pub fn prefill(schema: &EntitySchema, record: &Record) -> FormValues {
    schema
        .fields
        .iter()
        .map(|spec| (spec.name.to_owned(), record.text(spec.name)))
        .collect()
}

/// Validate every schema field; missing keys count as empty.
///
/// # Errors
///
/// Returns one [`FieldError`] per invalid field, in schema order.
pub fn validate(schema: &EntitySchema, values: &FormValues) -> Result<Map<String, Value>, Vec<FieldError>> {
    let mut row = Map::new();
    let mut errors = Vec::new();
    for spec in schema.fields {
        let raw = values.get(spec.name).map_or("", String::as_str);
        match convert(spec, raw) {
            Ok(value) => {
                row.insert(spec.name.to_owned(), value);
            }
            Err(e) => errors.push(e),
        }
    }
    if errors.is_empty() { Ok(row) } else { Err(errors) }
}

/// Validate only the fields present in `values`, rejecting unknown names.
/// Used for patches where absent fields stay as they are.
///
/// # Errors
///
/// Returns one [`FieldError`] per invalid or unknown field.
pub fn validate_partial(schema: &EntitySchema, values: &FormValues) -> Result<Map<String, Value>, Vec<FieldError>> {
    let mut row = Map::new();
    let mut errors = Vec::new();
    for (name, raw) in values {
        let Some(spec) = schema.field(name) else {
            errors.push(FieldError::new(name, format!("{} has no field `{name}`", schema.singular)));
            continue;
        };
        match convert(spec, raw) {
            Ok(value) => {
                row.insert(spec.name.to_owned(), value);
            }
            Err(e) => errors.push(e),
        }
    }
    if errors.is_empty() { Ok(row) } else { Err(errors) }
}

/// Flatten a JSON object into form strings so it can go through the same validation.
#[must_use]
pub fn values_from_json(object: &Map<String, Value>) -> FormValues {
    let record = Record(object.clone());
    object.keys().map(|key| (key.clone(), record.text(key))).collect()
}

fn convert(spec: &FieldSpec, raw: &str) -> Result<Value, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        if spec.required {
            return Err(FieldError::new(spec.name, format!("{} is required", spec.label)));
        }
        return Ok(Value::Null);
    }
    match spec.kind {
        FieldKind::Text | FieldKind::TextArea => Ok(Value::String(trimmed.to_owned())),
        FieldKind::Number => parse_number(trimmed)
            .map(Value::Number)
            .ok_or_else(|| FieldError::new(spec.name, format!("{} must be a number", spec.label))),
        FieldKind::Select(options) => {
            if options.iter().any(|o| o.value == trimmed) {
                Ok(Value::String(trimmed.to_owned()))
            } else {
                let allowed: Vec<&str> = options.iter().map(|o| o.value).collect();
                Err(FieldError::new(
                    spec.name,
                    format!("{} must be one of: {}", spec.label, allowed.join(", ")),
                ))
            }
        }
    }
}

fn parse_number(raw: &str) -> Option<Number> {
    if let Ok(int) = raw.parse::<i64>() {
        return Some(Number::from(int));
    }
    raw.parse::<f64>().ok().and_then(Number::from_f64)
}

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;
