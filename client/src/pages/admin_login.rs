//! Admin console sign-in.
//!
//! Only a profile with the `admin` role gets through. Any other account is
//! signed straight back out and the page reports the refusal inline.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal::guard::ADMIN_HOME_PATH;
use portal::{AuthState, Role};

use crate::app::AppSession;
use crate::pages::login::CredentialsForm;
use crate::util::auth::install_signed_in_redirect;

#[cfg(test)]
#[path = "admin_login_test.rs"]
mod admin_login_test;

/// Already-signed-in admins skip the form; other roles stay on it.
pub fn admin_destination(state: &AuthState) -> Option<&'static str> {
    matches!(state.role(), Some(Role::Admin)).then_some(ADMIN_HOME_PATH)
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    install_signed_in_redirect(auth, admin_destination, use_navigate());

    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = Callback::new(move |(email, password): (String, String)| {
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = session.sign_in_admin(&email, &password).await {
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
            title="Acadvizen Admin"
            subtitle="Administrator sign-in"
            busy=busy
            error=error
            on_submit=on_submit
        />
    }
}
