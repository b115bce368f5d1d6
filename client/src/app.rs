//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the one [`AppSession`] for the page and injects it through
//! Leptos context next to a reactive mirror of its [`AuthState`]. Guards and
//! pages read the signal; commands (sign-in, sign-out, data calls) go through
//! the provider.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use portal::guard::ADMIN_HOME_PATH;
use portal::{AuthState, RemoteClient, SessionProvider};

use crate::components::config_banner::ConfigBanner;
use crate::components::notice_banner::NoticeBanner;
use crate::net::config::backend_config;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    account::AccountPage, admin_dashboard::AdminDashboardPage, admin_login::AdminLoginPage, entity::EntityPage,
    home::HomePage, instructor::InstructorPage, login::LoginPage, student::StudentPage,
};
use crate::state::notice::Notice;
use crate::util::session_storage::BrowserStorage;

/// Session provider type injected into context.
pub type AppSession = SessionProvider<BrowserTransport>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::new(
        RemoteClient::new(backend_config(), BrowserTransport),
        Arc::new(BrowserStorage),
    );
    let auth = RwSignal::new(AuthState::Loading);
    let notice = RwSignal::new(None::<Notice>);

    provide_context(session.clone());
    provide_context(auth);
    provide_context(notice);

    crate::util::auth::bridge_auth_state(&session, auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/acadvizen.css"/>
        <Title text="Acadvizen"/>
        <ConfigBanner/>
        <NoticeBanner/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                <Route path=StaticSegment("admin") view=|| view! { <Redirect path=ADMIN_HOME_PATH/> }/>
                <Route path=(StaticSegment("admin"), ParamSegment("entity")) view=EntityPage/>
                <Route path=StaticSegment("student") view=StudentPage/>
                <Route path=StaticSegment("instructor") view=InstructorPage/>
                <Route path=StaticSegment("account") view=AccountPage/>
            </Routes>
        </Router>
    }
}
