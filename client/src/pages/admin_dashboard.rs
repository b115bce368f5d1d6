//! Admin overview: one counter card per entity table.

use leptos::prelude::*;
use portal::EntityKind;

use crate::app::AppSession;
use crate::components::admin_sidebar::AdminLayout;
use crate::components::guard::AdminRoute;
use crate::components::stat_card::StatCard;
use crate::state::dashboard::{DashboardStats, StatEntry};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <AdminRoute>
            <AdminLayout>
                <DashboardOverview/>
            </AdminLayout>
        </AdminRoute>
    }
}

#[component]
fn DashboardOverview() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let stats = RwSignal::new(DashboardStats::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = session.access_token();
        for kind in EntityKind::ALL {
            let query = portal::remote::Query::new();
            let result = session.client().count(kind.schema().table, &query, token.as_deref()).await;
            stats.update(|s| s.record(kind, result));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <h1 class="page-title">"Dashboard"</h1>
        <Show when=move || stats.with(|s| s.first_error().is_some())>
            <p class="page-error">{move || stats.with(|s| s.first_error().unwrap_or_default())}</p>
        </Show>
        <div class="stat-grid">
            {EntityKind::ALL
                .into_iter()
                .map(|kind| {
                    let value = Signal::derive(move || {
                        stats.with(|s| {
                            s.entries.iter().find(|e| e.kind == kind).map(StatEntry::display).unwrap_or_default()
                        })
                    });
                    view! { <StatCard label=kind.schema().title value=value href=kind.admin_path()/> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
