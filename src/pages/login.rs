//! Login page: email + password form driving the session store.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::net::types::LoginCredentials;
use crate::state::session::AppSession;

/// Validate and normalize the login form.
///
/// # Errors
///
/// Returns a user-facing message for the first failing field.
pub fn validate_login_input(
    email: &str,
    password: &str,
) -> Result<LoginCredentials, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email address.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok(LoginCredentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let state = session.state();
    #[cfg(feature = "hydrate")]
    let notices =
        expect_context::<RwSignal<crate::state::notices::NoticeState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                form_error.set(message.to_owned());
                return;
            }
        };
        form_error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.login(&credentials.email, &credentials.password).await {
                    Ok(()) => {
                        crate::state::notices::notify_success(notices, "Welcome back!");
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(_) => {
                        let message = state
                            .get_untracked()
                            .error
                            .unwrap_or_else(|| "Login failed".to_owned());
                        crate::state::notices::notify_error(notices, &message);
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Log in to your TechKatta account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@campus.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !form_error.get().is_empty()>
                    <p class="auth-form__error">{move || form_error.get()}</p>
                </Show>
                <Show when=move || state.get().error.is_some()>
                    <p class="auth-form__error">
                        {move || state.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
