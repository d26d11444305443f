//! Job listing route with title/location search and paging. The create
//! button only shows for privileged sessions; the create route itself is
//! guarded as well.

use crate::{
    components::{Alert, AlertKind, AppShell, Button, Spinner},
    features::{
        auth::{state::use_session, RequireAuth},
        jobs::client::{self, JobQuery},
    },
    routes::paths,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

const PER_PAGE: u32 = 10;

/// Date portion of the service's ISO timestamps.
fn short_date(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .unwrap_or(timestamp)
        .to_string()
}

#[component]
pub fn JobListPage() -> impl IntoView {
    let session = use_session();
    let access = session.access_level;
    let (title_input, set_title_input) = signal(String::new());
    let (location_input, set_location_input) = signal(String::new());
    let (query, set_query) = signal(JobQuery {
        page: 1,
        per_page: PER_PAGE,
        ..JobQuery::default()
    });

    let jobs = LocalResource::new(move || {
        let query = query.get();
        async move { client::list_jobs(&query).await }
    });

    let on_search = move |event: SubmitEvent| {
        event.prevent_default();
        set_query.set(JobQuery {
            job_title: title_input.get_untracked(),
            location: location_input.get_untracked(),
            page: 1,
            per_page: PER_PAGE,
        });
    };

    let turn_page = move |next: bool| {
        set_query.update(|query| {
            query.page = if next {
                query.page + 1
            } else {
                query.page.saturating_sub(1).max(1)
            };
        });
    };

    view! {
        <AppShell>
            <RequireAuth>
                <div class="space-y-6">
                    <div class="flex flex-wrap items-end justify-between gap-4">
                        <div class="space-y-1">
                            <h1 class="text-2xl font-semibold text-gray-900">"Jobs"</h1>
                            <p class="text-sm text-gray-500">"Browse and search open postings."</p>
                        </div>
                        <Show when=move || access.get().is_privileged()>
                            <A
                                href="/jobs/create"
                                {..}
                                class="rounded-md bg-blue-600 px-5 py-2 text-sm font-medium text-white hover:bg-blue-700"
                            >
                                "Create Job"
                            </A>
                        </Show>
                    </div>

                    <form class="flex flex-col gap-3 md:flex-row" on:submit=on_search>
                        <input
                            type="text"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 md:w-64"
                            placeholder="Search by title"
                            on:input=move |event| set_title_input.set(event_target_value(&event))
                        />
                        <input
                            type="text"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 md:w-64"
                            placeholder="Search by location"
                            on:input=move |event| set_location_input.set(event_target_value(&event))
                        />
                        <Button button_type="submit">"Search"</Button>
                    </form>

                    <div class="overflow-hidden bg-white shadow-sm border border-gray-200 rounded-lg">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                        "Title"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                        "Company"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                        "Location"
                                    </th>
                                    <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                        "Posted"
                                    </th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200">
                                <Suspense fallback=move || view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-12 text-center">
                                            <Spinner />
                                        </td>
                                    </tr>
                                }>
                                    {move || match jobs.get() {
                                        Some(Ok(response)) if response.jobs.is_empty() => {
                                            view! {
                                                <tr>
                                                    <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500">
                                                        "No jobs found."
                                                    </td>
                                                </tr>
                                            }.into_any()
                                        }
                                        Some(Ok(response)) => {
                                            let rows = response.jobs;
                                            view! {
                                                <For
                                                    each=move || rows.clone()
                                                    key=|job| job.id
                                                    children=|job| {
                                                        let posted = job
                                                            .created_at
                                                            .as_deref()
                                                            .map(short_date)
                                                            .unwrap_or_default();
                                                        view! {
                                                            <tr class="hover:bg-gray-50 transition-colors">
                                                                <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                                                                    <A
                                                                        href={paths::job_detail(job.id)}
                                                                        {..}
                                                                        class="text-blue-600 hover:text-blue-800"
                                                                    >
                                                                        {job.job_title}
                                                                    </A>
                                                                </td>
                                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                                    {job.company_name}
                                                                </td>
                                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                                    {job.location}
                                                                </td>
                                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                                                    {posted}
                                                                </td>
                                                            </tr>
                                                        }
                                                    }
                                                />
                                            }.into_any()
                                        }
                                        Some(Err(err)) => {
                                            view! {
                                                <tr>
                                                    <td colspan="4" class="px-6 py-4">
                                                        <Alert kind=AlertKind::Error message=err.to_string() />
                                                    </td>
                                                </tr>
                                            }.into_any()
                                        }
                                        None => view! {
                                            <tr>
                                                <td colspan="4" class="px-6 py-12 text-center">
                                                    <Spinner />
                                                </td>
                                            </tr>
                                        }.into_any(),
                                    }}
                                </Suspense>
                            </tbody>
                        </table>
                    </div>

                    <Suspense fallback=|| ()>
                        {move || {
                            jobs.get().and_then(Result::ok).map(|response| {
                                let pagination = response.pagination;
                                let label = format!(
                                    "Page {} of {} ({} jobs)",
                                    pagination.current_page,
                                    pagination.pages.max(1),
                                    pagination.total,
                                );
                                view! {
                                    <div class="flex items-center justify-between text-sm text-gray-600">
                                        <button
                                            type="button"
                                            class="rounded-md border border-gray-300 bg-white px-3 py-1.5 hover:bg-gray-50 disabled:cursor-not-allowed disabled:opacity-50"
                                            disabled=!pagination.has_prev
                                            on:click=move |_| turn_page(false)
                                        >
                                            "Previous"
                                        </button>
                                        <span>{label}</span>
                                        <button
                                            type="button"
                                            class="rounded-md border border-gray-300 bg-white px-3 py-1.5 hover:bg-gray-50 disabled:cursor-not-allowed disabled:opacity-50"
                                            disabled=!pagination.has_next
                                            on:click=move |_| turn_page(true)
                                        >
                                            "Next"
                                        </button>
                                    </div>
                                }
                            })
                        }}
                    </Suspense>
                </div>
            </RequireAuth>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use super::short_date;

    #[test]
    fn short_date_keeps_the_date_part() {
        assert_eq!(short_date("2026-03-14T09:30:00"), "2026-03-14");
        assert_eq!(short_date("2026-03-14"), "2026-03-14");
    }
}
