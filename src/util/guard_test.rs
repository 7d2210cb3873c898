use super::*;
use crate::state::session::{MemorySessionStore, SessionStore};

fn session_with_role(role: Role) -> Session {
    Session {
        token: "tok-1".to_owned(),
        user_id: "1".to_owned(),
        username: "alice".to_owned(),
        role,
    }
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn empty_session_redirects_to_login() {
    assert_eq!(
        evaluate(None, Some(Role::Admin)),
        RouteDecision::RedirectTo("/login")
    );
}

#[test]
fn empty_session_redirects_even_without_required_role() {
    assert_eq!(evaluate(None, None), RouteDecision::RedirectTo("/login"));
}

#[test]
fn wrong_role_redirects_to_login() {
    let session = session_with_role(Role::Volunteer);
    assert_eq!(
        evaluate(Some(&session), Some(Role::Admin)),
        RouteDecision::RedirectTo("/login")
    );
}

#[test]
fn matching_role_renders() {
    let session = session_with_role(Role::Admin);
    assert_eq!(evaluate(Some(&session), Some(Role::Admin)), RouteDecision::Render);
}

#[test]
fn any_authenticated_session_renders_when_no_role_required() {
    let session = session_with_role(Role::Volunteer);
    assert_eq!(evaluate(Some(&session), None), RouteDecision::Render);
}

#[test]
fn evaluation_is_idempotent_without_intervening_writes() {
    let session = session_with_role(Role::Volunteer);
    let first = evaluate(Some(&session), Some(Role::Admin));
    let second = evaluate(Some(&session), Some(Role::Admin));
    assert_eq!(first, second);

    let first = evaluate(Some(&session), Some(Role::Volunteer));
    let second = evaluate(Some(&session), Some(Role::Volunteer));
    assert_eq!(first, second);
}

// =============================================================
// root_dispatch
// =============================================================

#[test]
fn root_dispatch_targets_login_when_unauthenticated() {
    assert_eq!(root_dispatch(None), "/login");
}

#[test]
fn root_dispatch_targets_volunteer_dashboard_for_volunteers() {
    let session = session_with_role(Role::Volunteer);
    assert_eq!(root_dispatch(Some(&session)), "/volunteer/dashboard");
}

#[test]
fn root_dispatch_targets_admin_dashboard_for_admins() {
    let session = session_with_role(Role::Admin);
    assert_eq!(root_dispatch(Some(&session)), "/admin/dashboard");
}

// =============================================================
// Guard over the durable store
// =============================================================

#[test]
fn guard_follows_store_through_login_and_logout() {
    let store = MemorySessionStore::default();
    assert_eq!(
        evaluate(store.get().as_ref(), Some(Role::Admin)),
        RouteDecision::RedirectTo("/login")
    );

    store.set("tok-2", "2", "carol", true);
    assert_eq!(
        evaluate(store.get().as_ref(), Some(Role::Admin)),
        RouteDecision::Render
    );

    store.clear();
    assert_eq!(
        evaluate(store.get().as_ref(), Some(Role::Admin)),
        RouteDecision::RedirectTo("/login")
    );
}
