use super::*;
use portal::EntityKind;

#[test]
fn number_fields_use_numeric_inputs() {
    assert_eq!(input_type(FieldKind::Number), "number");
    assert_eq!(input_type(FieldKind::Text), "text");
}

#[test]
fn required_labels_are_marked() {
    let schema = EntityKind::Courses.schema();
    assert_eq!(field_label(schema.field("title").unwrap()), "Title *");
    assert_eq!(field_label(schema.field("price").unwrap()), "Price");
}
