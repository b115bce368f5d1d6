//! Student dashboard: courses, assignments, own certificates and the job board.

use leptos::prelude::*;
use portal::crud::list_query;
use portal::{AuthState, EntityKind, Role};

use crate::components::guard::RoleRoute;
use crate::pages::panels::{DashboardHeader, RecordPanel};

#[component]
pub fn StudentPage() -> impl IntoView {
    view! {
        <RoleRoute roles=vec![Role::Student]>
            <StudentDashboard/>
        </RoleRoute>
    }
}

#[component]
fn StudentDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let Some(profile) = auth.with_untracked(|a| a.profile().cloned()) else {
        return view! { <p>"Checking your session..."</p> }.into_any();
    };
    let certificates = list_query(EntityKind::Certificates.schema()).eq("student_id", &profile.id);

    view! {
        <div class="role-dashboard">
            <DashboardHeader title="My learning" profile=profile/>
            <RecordPanel kind=EntityKind::Courses heading="Courses" empty_text="No courses published yet."/>
            <RecordPanel kind=EntityKind::Assignments heading="Assignments" empty_text="No assignments yet."/>
            <RecordPanel
                kind=EntityKind::Certificates
                heading="My certificates"
                empty_text="No certificates issued to you yet."
                query=certificates
            />
            <RecordPanel kind=EntityKind::Jobs heading="Job board" empty_text="No openings right now."/>
        </div>
    }
    .into_any()
}
