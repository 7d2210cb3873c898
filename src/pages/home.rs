//! Root path dispatcher.

use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::state::session::SessionState;
use crate::util::guard::root_dispatch;

/// One-time dispatch for `/`: unauthenticated visitors go to the login page,
/// everyone else to the dashboard matching their role. Renders nothing.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // One-shot: reads the snapshot untracked so later session changes do not
    // re-dispatch a page the user has already left.
    Effect::new(move || {
        let snapshot = state.get_untracked();
        navigate(root_dispatch(snapshot.session.as_ref()), NavigateOptions::default());
    });

    view! { <main class="redirect-page"></main> }
}
