//! Reactive session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the app shell, and the auth pages all coordinate through
//! this store. It is the only writer of `SessionState`; pages call its
//! mutation methods and subscribe to the signal it exposes.
//!
//! ERROR HANDLING
//! ==============
//! `login`/`register` record a user-facing message in the `error` slot and
//! re-raise so callers can react; `fetch_user` swallows its error because the
//! startup probe has no caller to inform, only state to settle.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::AuthApi;
use crate::net::gateway::{ApiError, Gateway, GlooTransport, Transport};
use crate::net::tokens::{LocalStorageTokens, TokenStore};
use crate::net::types::{LoginCredentials, RegisterData, User};

/// Snapshot of the session as the UI sees it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Profile of the signed-in user, if one has been fetched.
    pub user: Option<User>,
    /// Credential presence, not validity. An expired token still reads as
    /// authenticated until a server call says otherwise.
    pub is_authenticated: bool,
    /// A session mutation is in flight.
    pub loading: bool,
    /// Message from the most recent failed login or registration.
    pub error: Option<String>,
}

/// Session store: one `RwSignal<SessionState>` plus the service that mutates
/// it. Copyable so views can capture it in event handlers.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore<T, K> {
    state: RwSignal<SessionState>,
    api: AuthApi<T, K>,
}

/// The store wired to the real browser transport and localStorage.
pub type AppSession = SessionStore<GlooTransport, LocalStorageTokens>;

impl AppSession {
    /// Store for the running app, seeded from persisted credentials.
    pub fn from_browser() -> Self {
        Self::new(AuthApi::new(Gateway::new(GlooTransport, LocalStorageTokens)))
    }
}

impl<T: Transport, K: TokenStore> SessionStore<T, K> {
    pub fn new(api: AuthApi<T, K>) -> Self {
        let state = RwSignal::new(SessionState {
            is_authenticated: api.is_authenticated(),
            ..SessionState::default()
        });
        Self { state, api }
    }

    /// Signal views subscribe to.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Whether credentials are currently stored.
    pub fn has_credentials(&self) -> bool {
        self.api.is_authenticated()
    }

    /// Log in and fetch the user profile.
    ///
    /// # Errors
    ///
    /// Re-raises the service error after recording a message in the `error`
    /// slot. If the profile fetch fails after tokens were persisted, the
    /// state stays unauthenticated; the next `fetch_user` settles it.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.login_inner(email, password).await {
            Ok(user) => {
                self.state.update(|s| {
                    s.user = Some(user);
                    s.is_authenticated = true;
                    s.loading = false;
                });
                Ok(())
            }
            Err(err) => {
                let message = login_error_message(&err);
                self.state.update(|s| {
                    s.error = Some(message);
                    s.loading = false;
                });
                Err(err)
            }
        }
    }

    async fn login_inner(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let credentials =
            LoginCredentials { email: email.to_owned(), password: password.to_owned() };
        self.api.login(&credentials).await?;
        self.api.current_user().await
    }

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// Re-raises the service error after recording a message in the `error`
    /// slot.
    pub async fn register(&self, data: &RegisterData) -> Result<User, ApiError> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.api.register(data).await {
            Ok(user) => {
                self.state.update(|s| s.loading = false);
                Ok(user)
            }
            Err(err) => {
                let message = register_error_message(&err);
                self.state.update(|s| {
                    s.error = Some(message);
                    s.loading = false;
                });
                Err(err)
            }
        }
    }

    /// Drop credentials and sign the UI out.
    pub fn logout(&self) {
        self.api.logout();
        self.state.update(|s| {
            s.user = None;
            s.is_authenticated = false;
        });
    }

    /// Startup probe: validate persisted credentials against the server.
    ///
    /// Skips the network entirely when no access token is stored. On failure
    /// the store clears credentials and settles to signed-out; the error goes
    /// to the console, not the UI.
    pub async fn fetch_user(&self) {
        if !self.api.is_authenticated() {
            self.state.update(|s| s.is_authenticated = false);
            return;
        }
        self.state.update(|s| s.loading = true);
        match self.api.current_user().await {
            Ok(user) => {
                self.state.update(|s| {
                    s.user = Some(user);
                    s.is_authenticated = true;
                    s.loading = false;
                });
            }
            Err(err) => {
                leptos::logging::warn!("session probe failed: {err}");
                self.api.logout();
                self.state.update(|s| {
                    s.is_authenticated = false;
                    s.loading = false;
                });
            }
        }
    }
}

fn login_error_message(err: &ApiError) -> String {
    err.detail().map_or_else(|| "Login failed".to_owned(), str::to_owned)
}

fn register_error_message(err: &ApiError) -> String {
    err.detail().map_or_else(|| "Registration failed".to_owned(), str::to_owned)
}
