use super::*;

fn hours(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries.iter().map(|(name, value)| ((*name).to_owned(), (*value).to_owned())).collect()
}

fn selected(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

// =============================================================
// toggle_selection
// =============================================================

#[test]
fn toggle_selection_adds_missing_username() {
    let next = toggle_selection(&selected(&["alice"]), "bob");
    assert_eq!(next, selected(&["alice", "bob"]));
}

#[test]
fn toggle_selection_removes_present_username() {
    let next = toggle_selection(&selected(&["alice", "bob"]), "alice");
    assert_eq!(next, selected(&["bob"]));
}

// =============================================================
// validate_attendance_input
// =============================================================

#[test]
fn builds_request_from_selected_volunteers() {
    let request = validate_attendance_input(
        " Weekly sync ",
        &selected(&["alice", "bob"]),
        &hours(&[("alice", "2.5"), ("bob", "1")]),
    )
    .expect("input should validate");
    assert_eq!(request.topic, "Weekly sync");
    assert_eq!(request.volunteer_hours.len(), 2);
    assert!((request.volunteer_hours["alice"] - 2.5).abs() < f64::EPSILON);
}

#[test]
fn skips_selected_volunteers_without_hours() {
    let request = validate_attendance_input(
        "Sync",
        &selected(&["alice", "bob"]),
        &hours(&[("alice", "2"), ("bob", "  ")]),
    )
    .expect("input should validate");
    assert_eq!(request.volunteer_hours.len(), 1);
    assert!(request.volunteer_hours.contains_key("alice"));
}

#[test]
fn ignores_hours_for_unselected_volunteers() {
    let request = validate_attendance_input(
        "Sync",
        &selected(&["alice"]),
        &hours(&[("alice", "2"), ("mallory", "9")]),
    )
    .expect("input should validate");
    assert!(!request.volunteer_hours.contains_key("mallory"));
}

#[test]
fn requires_topic() {
    assert_eq!(
        validate_attendance_input("  ", &selected(&["alice"]), &hours(&[("alice", "2")])),
        Err("Enter a task name.")
    );
}

#[test]
fn requires_at_least_one_entry() {
    assert_eq!(
        validate_attendance_input("Sync", &[], &hours(&[])),
        Err("Select at least one volunteer and enter hours.")
    );
}

#[test]
fn rejects_unparseable_hours() {
    assert_eq!(
        validate_attendance_input("Sync", &selected(&["alice"]), &hours(&[("alice", "two")])),
        Err("Enter valid hours for each selected volunteer.")
    );
}

#[test]
fn rejects_non_positive_hours() {
    assert_eq!(
        validate_attendance_input("Sync", &selected(&["alice"]), &hours(&[("alice", "-1")])),
        Err("Enter valid hours for each selected volunteer.")
    );
}
