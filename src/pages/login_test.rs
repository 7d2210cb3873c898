use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice  ", "secret"),
        Ok(("alice".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_username() {
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("alice", ""),
        Err("Enter both username and password.")
    );
}

#[test]
fn invalid_credentials_message_does_not_leak_detail() {
    assert_eq!(INVALID_CREDENTIALS, "Invalid username or password.");
}
