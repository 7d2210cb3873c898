use super::*;

// =============================================================
// Role derivation and parsing
// =============================================================

#[test]
fn staff_flag_derives_admin_role() {
    assert_eq!(Role::from_is_staff(true), Role::Admin);
}

#[test]
fn non_staff_flag_derives_volunteer_role() {
    assert_eq!(Role::from_is_staff(false), Role::Volunteer);
}

#[test]
fn role_parse_accepts_stored_values() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("volunteer"), Some(Role::Volunteer));
}

#[test]
fn role_parse_rejects_unknown_values() {
    assert_eq!(Role::parse("staff"), None);
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::parse("Admin"), None);
}

#[test]
fn role_as_str_round_trips_through_parse() {
    for role in [Role::Admin, Role::Volunteer] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn dashboard_path_matches_role() {
    assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
    assert_eq!(Role::Volunteer.dashboard_path(), "/volunteer/dashboard");
}

// =============================================================
// Store semantics (in-memory substitute)
// =============================================================

#[test]
fn set_then_get_returns_all_fields() {
    let store = MemorySessionStore::default();
    store.set("abc123", "7", "alice", true);
    let session = store.get().expect("session should be present after set");
    assert_eq!(session.token, "abc123");
    assert_eq!(session.user_id, "7");
    assert_eq!(session.username, "alice");
    assert_eq!(session.role, Role::Admin);
}

#[test]
fn set_without_staff_flag_stores_volunteer_role() {
    let store = MemorySessionStore::default();
    store.set("t", "1", "bob", false);
    assert_eq!(store.get().expect("session present").role, Role::Volunteer);
}

#[test]
fn fresh_store_is_empty() {
    let store = MemorySessionStore::default();
    assert!(store.get().is_none());
}

#[test]
fn clear_then_get_is_empty_regardless_of_prior_state() {
    let store = MemorySessionStore::default();
    store.clear();
    assert!(store.get().is_none());

    store.set("t", "1", "bob", false);
    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn set_overwrites_previous_session() {
    let store = MemorySessionStore::default();
    store.set("old", "1", "bob", false);
    store.set("new", "2", "carol", true);
    let session = store.get().expect("session present");
    assert_eq!(session.token, "new");
    assert_eq!(session.user_id, "2");
    assert_eq!(session.username, "carol");
    assert_eq!(session.role, Role::Admin);
}

#[test]
fn browser_store_is_empty_outside_browser() {
    // Native builds compile the storage stubs; reads must report no session
    // rather than a partial one.
    let store = BrowserSessionStore;
    store.set("t", "1", "bob", false);
    assert!(store.get().is_none());
    store.clear();
}

// =============================================================
// Login response mapping
// =============================================================

#[test]
fn session_from_login_copies_fields_and_derives_role() {
    let login = LoginResponse {
        token: "abc123".to_owned(),
        user_id: "7".to_owned(),
        username: "alice".to_owned(),
        is_staff: true,
    };
    let session = session_from_login(&login);
    assert_eq!(session.token, "abc123");
    assert_eq!(session.user_id, "7");
    assert_eq!(session.username, "alice");
    assert_eq!(session.role, Role::Admin);
}
