use super::*;
use portal::EntityKind;
use serde_json::json;

fn course() -> Record {
    Record(
        json!({ "id": 7, "title": "Rust", "description": null, "level": "beginner", "price": 4999 })
            .as_object()
            .unwrap()
            .clone(),
    )
}

#[test]
fn create_starts_blank_with_add_title() {
    let schema = EntityKind::Courses.schema();
    let editor = EditorState::create(schema);
    assert_eq!(editor.mode, EditorMode::Create);
    assert_eq!(editor.title(schema), "Add Course");
    assert_eq!(editor.value("title"), "");
}

#[test]
fn edit_prefills_from_record() {
    let schema = EntityKind::Courses.schema();
    let editor = EditorState::edit(schema, &course()).unwrap();
    assert_eq!(editor.mode, EditorMode::Edit(RecordId("7".to_owned())));
    assert_eq!(editor.title(schema), "Edit Course");
    assert_eq!(editor.value("title"), "Rust");
    assert_eq!(editor.value("price"), "4999");
    assert_eq!(editor.value("description"), "");
}

#[test]
fn edit_requires_an_id() {
    let schema = EntityKind::Courses.schema();
    let record = Record(json!({ "title": "No id" }).as_object().unwrap().clone());
    assert!(EditorState::edit(schema, &record).is_none());
}

#[test]
fn invalid_payload_records_errors_and_typing_clears_them() {
    let schema = EntityKind::Courses.schema();
    let mut editor = EditorState::create(schema);
    assert!(editor.payload(schema).is_none());
    assert!(editor.error_for("title").is_some());

    editor.set_value("title", "Data Science".to_owned());
    assert!(editor.error_for("title").is_none());
}

#[test]
fn valid_payload_is_typed_row() {
    let schema = EntityKind::Courses.schema();
    let mut editor = EditorState::edit(schema, &course()).unwrap();
    let row = editor.payload(schema).unwrap();
    assert_eq!(row.get("title"), Some(&json!("Rust")));
    assert_eq!(row.get("price"), Some(&json!(4999)));
    assert!(editor.errors.is_empty());
}
