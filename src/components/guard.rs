//! Route guard wrapping authenticated-only pages.

use leptos::prelude::*;

use crate::state::session::AppSession;
use crate::util::auth::{GuardDecision, guard_decision, install_guest_redirect};

/// Renders its children only for an authenticated session.
///
/// Shows a neutral spinner while the session is still resolving and
/// installs a `/login` redirect for settled guests, so protected content
/// never flashes for signed-out visitors.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let state = session.state();

    let navigate = leptos_router::hooks::use_navigate();
    install_guest_redirect(state, navigate);

    move || match guard_decision(&state.get()) {
        GuardDecision::Waiting => view! {
            <div class="route-guard">
                <div class="route-guard__spinner" aria-label="Loading"></div>
            </div>
        }
        .into_any(),
        GuardDecision::Allow => children().into_any(),
        GuardDecision::RedirectToLogin => ().into_any(),
    }
}
