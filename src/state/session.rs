//! Session model and durable session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is logged in and with what role". Pages
//! read a reactive snapshot provided via context; the durable store is only
//! ever written by login and logout, and a rejected token never clears it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Mutex;

use leptos::prelude::*;

use crate::net::types::LoginResponse;

/// Storage keys, written and cleared together.
#[cfg(feature = "csr")]
const KEY_TOKEN: &str = "token";
#[cfg(feature = "csr")]
const KEY_USER_ID: &str = "user_id";
#[cfg(feature = "csr")]
const KEY_USERNAME: &str = "username";
#[cfg(feature = "csr")]
const KEY_IS_STAFF: &str = "is_staff";
#[cfg(feature = "csr")]
const KEY_ROLE: &str = "role";

/// Role of the authenticated principal, fixed for the session's lifetime.
///
/// A role change requires a fresh login; nothing mutates it in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Volunteer,
}

impl Role {
    /// Derive the role from the backend's `is_staff` signal.
    pub fn from_is_staff(is_staff: bool) -> Self {
        if is_staff { Self::Admin } else { Self::Volunteer }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Volunteer => "volunteer",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "volunteer" => Some(Self::Volunteer),
            _ => None,
        }
    }

    /// Dashboard route for this role.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::Volunteer => "/volunteer/dashboard",
        }
    }
}

/// The client-held record of the current authenticated principal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer credential; never inspected locally.
    pub token: String,
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

/// Durable session storage behind an interface boundary.
///
/// Views depend on this abstraction rather than ambient browser storage, and
/// tests substitute [`MemorySessionStore`]. These are pure state operations
/// with no failure path: absence is a valid result, not an error.
pub trait SessionStore {
    /// Persist a full session, computing the role from `is_staff`. A
    /// subsequent [`SessionStore::get`] never observes a partial field set.
    fn set(&self, token: &str, user_id: &str, username: &str, is_staff: bool);

    /// Current session, or `None` when unauthenticated.
    fn get(&self) -> Option<Session>;

    /// Remove every session field, returning to the unauthenticated state.
    fn clear(&self);
}

/// `localStorage`-backed store used in the browser.
///
/// Reads return `None` and writes are no-ops outside a browser environment,
/// mirroring the gated stubs of the networking layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn set(&self, token: &str, user_id: &str, username: &str, is_staff: bool) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.set_item(KEY_TOKEN, token);
            let _ = storage.set_item(KEY_USER_ID, user_id);
            let _ = storage.set_item(KEY_USERNAME, username);
            let _ = storage.set_item(KEY_IS_STAFF, if is_staff { "true" } else { "false" });
            let _ = storage.set_item(KEY_ROLE, Role::from_is_staff(is_staff).as_str());
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, user_id, username, is_staff);
        }
    }

    fn get(&self) -> Option<Session> {
        #[cfg(feature = "csr")]
        {
            // All-or-nothing: a missing or unparseable field means no session.
            let storage = local_storage()?;
            let read = |key: &str| storage.get_item(key).ok().flatten();
            let token = read(KEY_TOKEN)?;
            let user_id = read(KEY_USER_ID)?;
            let username = read(KEY_USERNAME)?;
            let role = Role::parse(&read(KEY_ROLE)?)?;
            Some(Session { token, user_id, username, role })
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            for key in [KEY_TOKEN, KEY_USER_ID, KEY_USERNAME, KEY_IS_STAFF, KEY_ROLE] {
                let _ = storage.remove_item(key);
            }
        }
    }
}

/// In-memory store with the same all-or-nothing semantics, used as the test
/// substitute for [`BrowserSessionStore`].
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl SessionStore for MemorySessionStore {
    fn set(&self, token: &str, user_id: &str, username: &str, is_staff: bool) {
        let session = Session {
            token: token.to_owned(),
            user_id: user_id.to_owned(),
            username: username.to_owned(),
            role: Role::from_is_staff(is_staff),
        };
        if let Ok(mut slot) = self.session.lock() {
            *slot = Some(session);
        }
    }

    fn get(&self) -> Option<Session> {
        self.session.lock().ok().and_then(|slot| slot.clone())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = None;
        }
    }
}

/// Reactive snapshot of the session, provided via context at the app root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
}

/// Build the session a login response establishes.
pub fn session_from_login(login: &LoginResponse) -> Session {
    Session {
        token: login.token.clone(),
        user_id: login.user_id.clone(),
        username: login.username.clone(),
        role: Role::from_is_staff(login.is_staff),
    }
}

/// Write a successful login through the durable store, then refresh the
/// reactive snapshot. Returns the derived role so the caller can pick the
/// matching dashboard.
pub fn establish(
    store: &impl SessionStore,
    state: RwSignal<SessionState>,
    login: &LoginResponse,
) -> Role {
    store.set(&login.token, &login.user_id, &login.username, login.is_staff);
    let session = session_from_login(login);
    let role = session.role;
    state.set(SessionState { session: Some(session) });
    role
}

/// Clear the durable store and the reactive snapshot. The only
/// session-ending path; backend rejections never trigger it implicitly.
pub fn terminate(store: &impl SessionStore, state: RwSignal<SessionState>) {
    store.clear();
    state.set(SessionState::default());
}
