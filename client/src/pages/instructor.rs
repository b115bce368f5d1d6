//! Instructor dashboard: read-only course material overview.

use leptos::prelude::*;
use portal::{AuthState, EntityKind, Role};

use crate::components::guard::RoleRoute;
use crate::pages::panels::{DashboardHeader, RecordPanel};

#[component]
pub fn InstructorPage() -> impl IntoView {
    view! {
        <RoleRoute roles=vec![Role::Instructor]>
            <InstructorDashboard/>
        </RoleRoute>
    }
}

#[component]
fn InstructorDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let Some(profile) = auth.with_untracked(|a| a.profile().cloned()) else {
        return view! { <p>"Checking your session..."</p> }.into_any();
    };

    view! {
        <div class="role-dashboard">
            <DashboardHeader title="Instructor" profile=profile/>
            <RecordPanel kind=EntityKind::Courses heading="Courses" empty_text="No courses yet."/>
            <RecordPanel kind=EntityKind::Modules heading="Modules" empty_text="No modules yet."/>
            <RecordPanel kind=EntityKind::Assignments heading="Assignments" empty_text="No assignments yet."/>
        </div>
    }
    .into_any()
}
