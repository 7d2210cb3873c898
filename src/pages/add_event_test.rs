use super::*;

#[test]
fn builds_event_from_trimmed_fields() {
    let event = validate_event_input(" Beach Cleanup ", "2025-06-01", "09:00", " Shore ", " Bring gloves ")
        .expect("input should validate");
    assert_eq!(event.title, "Beach Cleanup");
    assert_eq!(event.date, "2025-06-01");
    assert_eq!(event.time, "09:00");
    assert_eq!(event.location, "Shore");
    assert_eq!(event.description, "Bring gloves");
}

#[test]
fn description_is_optional() {
    let event = validate_event_input("Drive", "2025-07-10", "10:00", "Hall", "")
        .expect("input should validate");
    assert_eq!(event.description, "");
}

#[test]
fn rejects_missing_required_fields() {
    let expected = Err("Title, date, time, and location are required.");
    assert_eq!(validate_event_input("", "2025-06-01", "09:00", "Shore", ""), expected);
    assert_eq!(validate_event_input("Cleanup", "", "09:00", "Shore", ""), expected);
    assert_eq!(validate_event_input("Cleanup", "2025-06-01", "", "Shore", ""), expected);
    assert_eq!(validate_event_input("Cleanup", "2025-06-01", "09:00", "  ", ""), expected);
}
