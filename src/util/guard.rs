//! Role-based route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected destination applies the same guard, parameterized by the
//! required role. The decision itself is a pure read of the current session
//! snapshot: it never throws and never causes a session transition.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Role, Session, SessionState};

/// Destination for unauthenticated or wrong-role navigation attempts.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of evaluating a protected navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested destination.
    Render,
    /// Navigate to this path instead of rendering.
    RedirectTo(&'static str),
}

/// Decide render-vs-redirect for a destination that requires `required`, or
/// any authenticated session when `required` is `None`.
///
/// Absence of a session is a valid redirect outcome, not an error. Wrong-role
/// sessions are also sent to the login view, silently.
pub fn evaluate(session: Option<&Session>, required: Option<Role>) -> RouteDecision {
    let Some(session) = session else {
        return RouteDecision::RedirectTo(LOGIN_PATH);
    };
    match required {
        Some(role) if session.role != role => RouteDecision::RedirectTo(LOGIN_PATH),
        _ => RouteDecision::Render,
    }
}

/// One-time dispatch for the root path: login when unauthenticated, otherwise
/// the dashboard matching the session role.
pub fn root_dispatch(session: Option<&Session>) -> &'static str {
    match session {
        None => LOGIN_PATH,
        Some(session) => session.role.dashboard_path(),
    }
}

/// Install the guard on the current page: whenever the session snapshot
/// changes, re-evaluate and navigate away if the decision is a redirect.
pub fn install_role_guard<F>(state: RwSignal<SessionState>, required: Option<Role>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let snapshot = state.get();
        if let RouteDecision::RedirectTo(path) = evaluate(snapshot.session.as_ref(), required) {
            navigate(path, NavigateOptions::default());
        }
    });
}
