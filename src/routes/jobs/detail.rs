use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::{state::use_session, RequireAuth};
use crate::features::jobs::client;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
struct JobParams {
    id: Option<String>,
}

#[component]
pub fn JobDetailPage() -> impl IntoView {
    let session = use_session();
    let access = session.access_level;
    let params = use_params::<JobParams>();
    // Reading the params inside the fetcher refetches on in-app navigation
    // between postings.
    let job = LocalResource::new(move || {
        let id = params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        async move {
            let id: i64 = id
                .trim()
                .parse()
                .map_err(|_| AppError::Validation("Job id must be a number.".to_string()))?;

            client::get_job(id).await
        }
    });

    view! {
        <AppShell>
            <RequireAuth>
                <div class="max-w-3xl mx-auto space-y-4">
                    <A
                        href="/jobs"
                        {..}
                        class="inline-block text-sm text-blue-600 hover:text-blue-800"
                    >
                        "< Back to jobs"
                    </A>
                    <Suspense fallback=move || view! { <Spinner /> }>
                        {move || match job.get() {
                            Some(Ok(job)) => {
                                let posted = job
                                    .created_at
                                    .as_deref()
                                    .map(|timestamp| {
                                        timestamp.split('T').next().unwrap_or(timestamp).to_string()
                                    })
                                    .unwrap_or_default();
                                let raw_jd_text = job.raw_jd_text.clone().unwrap_or_default();
                                view! {
                                    <div class="bg-white border border-gray-200 rounded-lg p-6 space-y-6">
                                        <div class="space-y-1">
                                            <h1 class="text-2xl font-semibold text-gray-900">
                                                {job.job_title}
                                            </h1>
                                            <p class="text-sm text-gray-500">
                                                {format!("{} | {} | Posted {}", job.company_name, job.location, posted)}
                                            </p>
                                        </div>

                                        <div class="space-y-1">
                                            <h2 class="text-sm font-medium uppercase tracking-wide text-gray-500">
                                                "Responsibilities"
                                            </h2>
                                            <ul class="list-disc ml-5 text-sm text-gray-700 space-y-0.5">
                                                {job.responsibilities
                                                    .into_iter()
                                                    .map(|item| view! { <li>{item}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </div>

                                        <div class="space-y-1">
                                            <h2 class="text-sm font-medium uppercase tracking-wide text-gray-500">
                                                "Requirements"
                                            </h2>
                                            <ul class="list-disc ml-5 text-sm text-gray-700 space-y-0.5">
                                                {job.requirements
                                                    .into_iter()
                                                    .map(|item| view! { <li>{item}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </div>

                                        <Show when=move || access.get().is_privileged()>
                                            <div class="space-y-1">
                                                <h2 class="text-sm font-medium uppercase tracking-wide text-gray-500">
                                                    "Raw Description"
                                                </h2>
                                                <pre class="whitespace-pre-wrap rounded-md bg-gray-50 p-4 font-mono text-xs text-gray-700">
                                                    {raw_jd_text.clone()}
                                                </pre>
                                            </div>
                                        </Show>
                                    </div>
                                }
                                .into_any()
                            }
                            Some(Err(err)) => {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any()
                            }
                            None => view! { <Spinner /> }.into_any(),
                        }}
                    </Suspense>
                </div>
            </RequireAuth>
        </AppShell>
    }
}
