//! Admin console chrome: section navigation plus the page frame around it.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use portal::guard::ADMIN_HOME_PATH;
use portal::{AuthState, EntityKind};

use crate::app::AppSession;
use crate::state::notice::Notice;
use crate::util::auth::sign_out_with_notice;

#[cfg(test)]
#[path = "admin_sidebar_test.rs"]
mod admin_sidebar_test;

/// Sidebar entries as `(label, path)`, dashboard first.
pub fn nav_items() -> Vec<(&'static str, String)> {
    std::iter::once(("Dashboard", ADMIN_HOME_PATH.to_owned()))
        .chain(EntityKind::ALL.into_iter().map(|kind| (kind.schema().title, kind.admin_path())))
        .collect()
}

pub fn is_active(current: &str, path: &str) -> bool {
    current == path || current.strip_prefix(path).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn AdminSidebar() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = expect_context::<RwSignal<Option<Notice>>>();
    let location = use_location();

    let who = move || auth.with(|a| a.profile().map(|p| p.display_name().to_owned()).unwrap_or_default());

    view! {
        <aside class="admin-sidebar">
            <div class="admin-sidebar__brand">"Acadvizen Admin"</div>
            <nav class="admin-sidebar__nav">
                {nav_items()
                    .into_iter()
                    .map(|(label, path)| {
                        let target = path.clone();
                        let class = move || {
                            if is_active(&location.pathname.get(), &target) {
                                "admin-sidebar__link admin-sidebar__link--active"
                            } else {
                                "admin-sidebar__link"
                            }
                        };
                        view! {
                            <a class=class href=path>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="admin-sidebar__footer">
                <span class="admin-sidebar__who">{who}</span>
                <button class="btn admin-sidebar__logout" on:click=move |_| sign_out_with_notice(session.clone(), notice)>
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    view! {
        <div class="admin-layout">
            <AdminSidebar/>
            <main class="admin-layout__content">{children()}</main>
        </div>
    }
}
