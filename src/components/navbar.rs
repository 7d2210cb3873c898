//! Top navigation bar with branding and the logout action.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::state::session::{BrowserSessionStore, SessionState, terminate};
#[cfg(feature = "csr")]
use crate::util::guard::LOGIN_PATH;

/// Header bar; shows the signed-in username and a logout button whenever a
/// session is present.
#[component]
pub fn Navbar() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();

    view! {
        <header class="navbar">
            <a class="navbar__title" href="/">
                "Prabhav Volunteer System"
            </a>
            <Show when=move || state.get().session.is_some()>
                <div class="navbar__session">
                    <span class="navbar__user">
                        {move || state.get().session.map(|s| s.username).unwrap_or_default()}
                    </span>
                    <LogoutButton/>
                </div>
            </Show>
        </header>
    }
}

/// Logout clears the session store and returns to the login view; it is the
/// only session-ending action in the app.
#[component]
fn LogoutButton() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_logout = move |_| {
        terminate(&BrowserSessionStore, state);
        #[cfg(feature = "csr")]
        {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    };

    view! {
        <button class="btn btn--outline" on:click=on_logout>
            "Logout"
        </button>
    }
}
