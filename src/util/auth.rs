//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical guest redirect behavior, and the
//! gateway needs a hard navigation when a refresh fails mid-flight.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// What a guarded route should render for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving; show a neutral placeholder.
    Waiting,
    /// Render the protected content.
    Allow,
    /// Send the visitor to `/login`.
    RedirectToLogin,
}

/// Decide what a guarded route should do. Loading wins over everything so a
/// slow startup probe never flashes a redirect.
pub fn guard_decision(state: &SessionState) -> GuardDecision {
    if state.loading {
        GuardDecision::Waiting
    } else if state.is_authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Navigate to `/login` whenever the session settles unauthenticated.
pub fn install_guest_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if guard_decision(&session.get()) == GuardDecision::RedirectToLogin {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Hard browser navigation to `/login`, bypassing the router.
///
/// Used when a token refresh fails: the whole app state is stale at that
/// point and a full reload is the cleanest reset. No-op off the browser.
pub fn force_login_redirect() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
