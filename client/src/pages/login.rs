//! Sign-in page for students and instructors.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful sign-in updates the shared auth signal; the redirect effect
//! then sends the user to the landing page of their role. Visitors who are
//! already signed in are redirected the same way.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal::AuthState;
use portal::guard::signed_in_destination;

use crate::app::AppSession;
use crate::util::auth::install_signed_in_redirect;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

pub const MISSING_CREDENTIALS: &str = "Enter your email and password.";

/// Trim the email and require both values.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Email + password card shared by both sign-in pages.
#[component]
pub fn CredentialsForm(
    title: &'static str,
    subtitle: &'static str,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    on_submit: Callback<(String, String)>,
) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let configured = session.client().is_configured();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => {
                error.set(None);
                on_submit.run(credentials);
            }
            Err(message) => error.set(Some(message.to_owned())),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{title}</h1>
                <p class="login-card__subtitle">{subtitle}</p>
                <form class="login-form" on:submit=submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get() || !configured>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    install_signed_in_redirect(auth, signed_in_destination, use_navigate());

    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = Callback::new(move |(email, password): (String, String)| {
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = session.sign_in(&email, &password).await {
                    error.set(Some(e.to_string()));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, email, password);
        }
    });

    view! {
        <CredentialsForm
            title="Acadvizen"
            subtitle="Sign in to your learning dashboard"
            busy=busy
            error=error
            on_submit=on_submit
        />
    }
}
