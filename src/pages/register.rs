//! Registration page with client-side field validation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::net::types::RegisterData;
use crate::state::session::AppSession;

/// Validate and normalize the registration form.
///
/// A blank full name becomes `None`; everything else must pass the same
/// rules the server enforces, so most rejections never leave the browser.
///
/// # Errors
///
/// Returns a user-facing message for the first failing field.
pub fn validate_register_input(
    email: &str,
    username: &str,
    full_name: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterData, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    let username = username.trim();
    if username.len() < 3 {
        return Err("Username must be at least 3 characters.");
    }
    if username.len() > 50 {
        return Err("Username must be at most 50 characters.");
    }
    let full_name = full_name.trim();
    if !full_name.is_empty() && full_name.len() < 2 {
        return Err("Full name must be at least 2 characters.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterData {
        email: email.to_owned(),
        username: username.to_owned(),
        password: password.to_owned(),
        full_name: (!full_name.is_empty()).then(|| full_name.to_owned()),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let state = session.state();
    #[cfg(feature = "hydrate")]
    let notices =
        expect_context::<RwSignal<crate::state::notices::NoticeState>>();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let data = match validate_register_input(
            &email.get(),
            &username.get(),
            &full_name.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(data) => data,
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
                match session.register(&data).await {
                    Ok(_) => {
                        crate::state::notices::notify_success(
                            notices,
                            "Account created! Please login.",
                        );
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(_) => {
                        let message = state
                            .get_untracked()
                            .error
                            .unwrap_or_else(|| "Registration failed".to_owned());
                        crate::state::notices::notify_error(notices, &message);
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = data;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Join TechKatta"</h1>
                <p class="auth-card__subtitle">"Create your account"</p>
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
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name (optional)"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
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
                    "Already have an account? "
                    <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
