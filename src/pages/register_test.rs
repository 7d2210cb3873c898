use super::*;

#[test]
fn builds_request_from_trimmed_fields() {
    let request = validate_registration_input(
        " alice ",
        " alice@example.com ",
        "secret",
        "secret",
        " 5551234 ",
    )
    .expect("input should validate");
    assert_eq!(request.username, "alice");
    assert_eq!(request.email, "alice@example.com");
    assert_eq!(request.password, "secret");
    assert_eq!(request.phone_number, "5551234");
}

#[test]
fn rejects_mismatched_passwords() {
    assert_eq!(
        validate_registration_input("alice", "a@b.com", "secret", "other", "555"),
        Err("Passwords do not match.")
    );
}

#[test]
fn rejects_missing_fields() {
    assert_eq!(
        validate_registration_input("", "a@b.com", "secret", "secret", "555"),
        Err("Fill in every field.")
    );
    assert_eq!(
        validate_registration_input("alice", "a@b.com", "secret", "secret", "   "),
        Err("Fill in every field.")
    );
}

#[test]
fn password_is_not_trimmed() {
    let request = validate_registration_input("alice", "a@b.com", " secret ", " secret ", "555")
        .expect("input should validate");
    assert_eq!(request.password, " secret ");
}
