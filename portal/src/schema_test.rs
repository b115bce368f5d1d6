use super::*;

#[test]
fn slugs_round_trip_for_every_entity() {
    for kind in EntityKind::ALL {
        assert_eq!(EntityKind::from_slug(kind.slug()), Some(kind));
        assert_eq!(kind.schema().kind, kind);
    }
    assert_eq!(EntityKind::from_slug("login"), None);
    assert_eq!(EntityKind::from_slug("dashboard"), None);
}

#[test]
fn admin_paths_live_under_admin() {
    assert_eq!(EntityKind::Courses.admin_path(), "/admin/courses");
    assert_eq!(EntityKind::Certificates.admin_path(), "/admin/certificates");
}

#[test]
fn columns_and_searchable_fields_reference_known_fields() {
    for kind in EntityKind::ALL {
        let schema = kind.schema();
        for column in schema.columns {
            assert!(schema.field(column.field).is_some(), "{}.{}", schema.table, column.field);
        }
        for name in schema.searchable {
            assert!(schema.field(name).is_some(), "{}.{name}", schema.table);
        }
    }
}

#[test]
fn every_entity_has_a_required_field() {
    for kind in EntityKind::ALL {
        assert!(kind.schema().fields.iter().any(|f| f.required), "{}", kind.slug());
    }
}

#[test]
fn select_fields_have_options() {
    for kind in EntityKind::ALL {
        for spec in kind.schema().fields {
            if let FieldKind::Select(options) = spec.kind {
                assert!(!options.is_empty(), "{}", spec.name);
            }
        }
    }
}
