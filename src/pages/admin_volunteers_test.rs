use super::*;

fn record(username: &str) -> VolunteerRecord {
    VolunteerRecord {
        id: "1".to_owned(),
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        total_hours: 0,
        events_attended: Vec::new(),
        meetings_attended: Vec::new(),
        phone_number: None,
    }
}

#[test]
fn filter_by_username_is_case_insensitive() {
    let records = vec![record("Alice"), record("bob"), record("malice")];
    let filtered = filter_by_username(&records, "ALI");
    let names: Vec<_> = filtered.iter().map(|r| r.username.as_str()).collect();
    assert_eq!(names, vec!["Alice", "malice"]);
}

#[test]
fn filter_by_username_with_empty_term_keeps_everything() {
    let records = vec![record("alice"), record("bob")];
    assert_eq!(filter_by_username(&records, "  ").len(), 2);
}

#[test]
fn visible_count_caps_collapsed_lists_at_three() {
    assert_eq!(visible_count(5, false), 3);
    assert_eq!(visible_count(2, false), 2);
}

#[test]
fn visible_count_expands_to_full_length() {
    assert_eq!(visible_count(5, true), 5);
}

#[test]
fn validate_reset_input_requires_password() {
    assert_eq!(validate_reset_input("alice", ""), Err("Enter a new password."));
}

#[test]
fn validate_reset_input_builds_request() {
    let request = validate_reset_input("alice", "hunter2").expect("input should validate");
    assert_eq!(request.username, "alice");
    assert_eq!(request.new_password, "hunter2");
}
