mod health;
mod job_match;
mod jobs;
mod login;
mod not_found;
mod profile;

pub(crate) use health::HealthPage;
pub(crate) use job_match::JobMatchPage;
pub(crate) use jobs::{CreateJobPage, JobDetailPage, JobListPage};
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;

/// Builders for parameterized paths so links stay consistent across routes.
pub(crate) mod paths {
    pub fn job_detail(id: i64) -> String {
        format!("/jobs/{id}")
    }
}

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=|| view! { <Redirect path="/jobs" /> } />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/jobs") view=JobListPage />
            <Route path=path!("/jobs/create") view=CreateJobPage />
            <Route path=path!("/jobs/:id") view=JobDetailPage />
            <Route path=path!("/match") view=JobMatchPage />
            <Route path=path!("/profile") view=ProfilePage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
