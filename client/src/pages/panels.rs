//! Read-only building blocks shared by the role dashboards.

use leptos::prelude::*;
use portal::crud::{self, CrudState};
use portal::remote::Query;
use portal::{EntityKind, Profile};

use crate::app::AppSession;
use crate::components::data_table::DataTable;
use crate::state::notice::Notice;
use crate::util::auth::sign_out_with_notice;

/// Titled list of one table's rows, loaded once on mount.
#[component]
pub fn RecordPanel(
    kind: EntityKind,
    #[prop(into)] heading: String,
    #[prop(into)] empty_text: String,
    #[prop(optional)] query: Option<Query>,
) -> impl IntoView {
    let schema = kind.schema();
    let session = expect_context::<AppSession>();
    let list = RwSignal::new(CrudState::default());
    let query = query.unwrap_or_else(|| crud::list_query(schema));

    list.update(CrudState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = session.access_token();
        let result = session.client().select(schema.table, &query, token.as_deref()).await;
        list.update(|s| s.finish_load(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, query);

    let rows = Signal::derive(move || list.with(|s| s.items.clone()));

    view! {
        <section class="panel">
            <h2 class="panel__title">{heading}</h2>
            <Show when=move || list.with(|s| s.error.is_some())>
                <p class="page-error">{move || list.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || !list.with(|s| s.loading) fallback=|| view! { <p>"Loading..."</p> }>
                <DataTable columns=schema.columns rows=rows empty_text=empty_text.clone()/>
            </Show>
        </section>
    }
}

/// Greeting bar with the signed-in identity and a sign-out button.
#[component]
pub fn DashboardHeader(title: &'static str, profile: Profile) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let notice = expect_context::<RwSignal<Option<Notice>>>();
    let email = profile.email.clone().unwrap_or_default();

    view! {
        <header class="dashboard-header">
            <div>
                <h1 class="page-title">{title}</h1>
                <p class="dashboard-header__who">
                    {format!("Welcome, {}", profile.display_name())}
                    <span class="dashboard-header__email">{email}</span>
                </p>
            </div>
            <button class="btn" on:click=move |_| sign_out_with_notice(session.clone(), notice)>
                "Sign out"
            </button>
        </header>
    }
}
