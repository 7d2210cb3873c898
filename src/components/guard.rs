//! Route-level wrapper applying the role guard to protected pages.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Role, SessionState};
use crate::util::guard::{RouteDecision, evaluate, install_role_guard};

/// Renders its children only while the guard decision is `Render`, and
/// installs the redirect effect for every other outcome.
///
/// Children are not constructed on a redirect path, so protected views never
/// issue backend requests without having passed the guard.
#[component]
pub fn Guarded(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_role_guard(state, role, navigate);

    view! {
        <Show when=move || {
            matches!(evaluate(state.get().session.as_ref(), role), RouteDecision::Render)
        }>{children()}</Show>
    }
}
