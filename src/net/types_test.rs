use super::*;

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_accepts_numeric_user_id() {
    let json = r#"{"token": "abc123", "user_id": 7, "username": "alice", "is_staff": true}"#;
    let resp: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.token, "abc123");
    assert_eq!(resp.user_id, "7");
    assert_eq!(resp.username, "alice");
    assert!(resp.is_staff);
}

#[test]
fn login_response_accepts_string_user_id() {
    let json = r#"{"token": "t", "user_id": "42", "username": "bob", "is_staff": false}"#;
    let resp: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.user_id, "42");
    assert!(!resp.is_staff);
}

#[test]
fn login_response_rejects_non_scalar_user_id() {
    let json = r#"{"token": "t", "user_id": [1], "username": "bob", "is_staff": false}"#;
    assert!(serde_json::from_str::<LoginResponse>(json).is_err());
}

// =============================================================
// RegisterErrors
// =============================================================

#[test]
fn register_errors_prefer_username_message() {
    let json = r#"{"username": ["A user with that username already exists."], "email": ["Enter a valid email address."]}"#;
    let errors: RegisterErrors = serde_json::from_str(json).unwrap();
    assert_eq!(
        errors.first_message().as_deref(),
        Some("A user with that username already exists.")
    );
}

#[test]
fn register_errors_fall_back_to_email_message() {
    let json = r#"{"email": ["Enter a valid email address."]}"#;
    let errors: RegisterErrors = serde_json::from_str(json).unwrap();
    assert_eq!(errors.first_message().as_deref(), Some("Enter a valid email address."));
}

#[test]
fn register_errors_empty_body_has_no_message() {
    let errors: RegisterErrors = serde_json::from_str("{}").unwrap();
    assert_eq!(errors.first_message(), None);
}

// =============================================================
// Events
// =============================================================

#[test]
fn event_record_deserializes_full_payload() {
    let json = r#"{
        "id": 3,
        "title": "Beach Cleanup",
        "description": "Bring gloves.",
        "date": "2025-06-01",
        "time": "09:00:00",
        "volunteers": ["alice", "bob"]
    }"#;
    let event: EventRecord = serde_json::from_str(json).unwrap();
    assert_eq!(event.id, Some(3));
    assert_eq!(event.title, "Beach Cleanup");
    assert_eq!(event.volunteers, vec!["alice", "bob"]);
}

#[test]
fn event_record_defaults_missing_optional_fields() {
    let json = r#"{"title": "Drive", "date": "2025-07-10"}"#;
    let event: EventRecord = serde_json::from_str(json).unwrap();
    assert_eq!(event.id, None);
    assert_eq!(event.description, "");
    assert_eq!(event.time, "");
    assert!(event.volunteers.is_empty());
}

#[test]
fn new_event_serializes_expected_fields() {
    let event = NewEvent {
        title: "Drive".to_owned(),
        description: "Food drive".to_owned(),
        date: "2025-07-10".to_owned(),
        time: "10:00".to_owned(),
        location: "Community hall".to_owned(),
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["title"], "Drive");
    assert_eq!(value["date"], "2025-07-10");
    assert_eq!(value["location"], "Community hall");
}

// =============================================================
// Volunteer records and profile
// =============================================================

#[test]
fn volunteer_record_deserializes_admin_listing_payload() {
    let json = r#"{
        "id": 5,
        "username": "alice",
        "email": "alice@example.com",
        "total_hours": 12,
        "events_attended": ["Beach Cleanup"],
        "meetings_attended": [{"topic": "Weekly sync", "online_hours": 1.5}],
        "phone_number": null
    }"#;
    let record: VolunteerRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, "5");
    assert_eq!(record.total_hours, 12);
    assert_eq!(record.meetings_attended.len(), 1);
    assert_eq!(record.meetings_attended[0].topic.as_deref(), Some("Weekly sync"));
    assert_eq!(record.phone_number, None);
}

#[test]
fn volunteer_profile_deserializes_dashboard_payload() {
    let json = r#"{
        "username": "alice",
        "email": "alice@example.com",
        "phone_number": "5551234",
        "hours_worked": 20,
        "events_attended": [{"title": "Beach Cleanup", "date": "2025-06-01"}],
        "upcoming_events": [
            {"title": "Food Drive", "date": "2025-07-10", "time": "10:00:00", "description": "Sorting"}
        ],
        "attendance": [{"topic": "Weekly sync", "hours": 2.0}, {"topic": null, "hours": 1.0}]
    }"#;
    let profile: VolunteerProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.hours_worked, 20);
    assert_eq!(profile.events_attended[0].title, "Beach Cleanup");
    assert_eq!(profile.upcoming_events[0].time, "10:00:00");
    assert_eq!(profile.attendance.len(), 2);
    assert_eq!(profile.attendance[1].topic, None);
}

// =============================================================
// Admin write payloads
// =============================================================

#[test]
fn assign_hours_request_serializes_backend_field_names() {
    let request = AssignHoursRequest {
        volunteer: "alice".to_owned(),
        event: "Beach Cleanup".to_owned(),
        event_date: "2025-06-01".to_owned(),
        hours: 4.0,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["volunteer"], "alice");
    assert_eq!(value["event"], "Beach Cleanup");
    assert_eq!(value["event_date"], "2025-06-01");
    assert_eq!(value["hours"], 4.0);
}

#[test]
fn mark_attendance_request_serializes_hours_map_as_object() {
    let mut volunteer_hours = std::collections::BTreeMap::new();
    volunteer_hours.insert("alice".to_owned(), 2.5);
    volunteer_hours.insert("bob".to_owned(), 1.0);
    let request = MarkAttendanceRequest { topic: "Weekly sync".to_owned(), volunteer_hours };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["topic"], "Weekly sync");
    assert_eq!(value["volunteer_hours"]["alice"], 2.5);
    assert_eq!(value["volunteer_hours"]["bob"], 1.0);
}

#[test]
fn message_response_defaults_missing_message() {
    let body: MessageResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, "");
}
