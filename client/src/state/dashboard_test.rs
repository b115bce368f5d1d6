use super::*;

#[test]
fn starts_with_every_entity_loading() {
    let stats = DashboardStats::default();
    assert_eq!(stats.entries.len(), EntityKind::ALL.len());
    assert!(stats.entries.iter().all(|e| e.value == StatValue::Loading));
    assert_eq!(stats.entries[0].display(), "...");
    assert_eq!(stats.first_error(), None);
}

#[test]
fn records_counts_and_failures_per_entity() {
    let mut stats = DashboardStats::default();
    stats.record(EntityKind::Courses, Ok(12));
    stats.record(EntityKind::Jobs, Err(RemoteError::Status { status: 403, message: String::new() }));

    let courses = stats.entries.iter().find(|e| e.kind == EntityKind::Courses).unwrap();
    assert_eq!(courses.display(), "12");
    let jobs = stats.entries.iter().find(|e| e.kind == EntityKind::Jobs).unwrap();
    assert_eq!(jobs.display(), "n/a");
    assert_eq!(stats.first_error().as_deref(), Some("You are not allowed to perform this action."));
}
