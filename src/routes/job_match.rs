//! Matching route. Collects the criteria, drives the matching workflow, and
//! renders whichever phase the workflow is in. Zero recommendations render as
//! a notice, not as an error.

use crate::components::{Alert, AlertKind, AppShell, Button, ScoreBar, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::matching::types::{JobRecommendation, MatchCriteria, MatchPhase};
use crate::features::matching::workflow::MatchWorkflow;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn JobMatchPage() -> impl IntoView {
    let workflow = MatchWorkflow::new();
    let phase = workflow.phase;
    let (desired_position, set_desired_position) = signal(String::new());
    let (desired_location, set_desired_location) = signal(String::new());
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_form_error.set(None);

        let criteria = MatchCriteria {
            desired_position: desired_position.get_untracked(),
            desired_location: desired_location.get_untracked(),
        };
        if let Err(message) = workflow.submit(criteria) {
            set_form_error.set(Some(message));
        }
    };

    view! {
        <AppShell>
            <RequireAuth>
                <div class="space-y-6">
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900">"Match Jobs"</h1>
                        <p class="text-sm text-gray-500">
                            "Recommendations are ranked against the resume stored on your profile page."
                        </p>
                    </div>

                    <form
                        class="bg-white border border-gray-200 rounded-lg p-4 flex flex-col gap-3 md:flex-row"
                        on:submit=on_submit
                    >
                        <input
                            type="text"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 md:flex-1"
                            placeholder="Desired position, e.g. Backend Engineer"
                            on:input=move |event| set_desired_position.set(event_target_value(&event))
                        />
                        <input
                            type="text"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 md:flex-1"
                            placeholder="Desired location, e.g. Beijing"
                            on:input=move |event| set_desired_location.set(event_target_value(&event))
                        />
                        <Button
                            button_type="submit"
                            disabled=Signal::derive(move || phase.get().is_loading())
                        >
                            "Find Matches"
                        </Button>
                    </form>

                    {move || {
                        form_error
                            .get()
                            .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                    }}

                    {move || match phase.get() {
                        MatchPhase::Idle => ().into_any(),
                        MatchPhase::Loading => {
                            view! {
                                <div class="py-12 text-center space-y-4">
                                    <Spinner />
                                    <p class="text-sm text-gray-500">"Analyzing your resume against open postings..."</p>
                                </div>
                            }
                                .into_any()
                        }
                        MatchPhase::Loaded(items) if items.is_empty() => {
                            view! { <Alert kind=AlertKind::Info message="No matching jobs found.".to_string() /> }
                                .into_any()
                        }
                        MatchPhase::Loaded(items) => {
                            view! {
                                <div class="space-y-4">
                                    <For
                                        each=move || items.clone()
                                        key=|item| item.job_id
                                        children=|item| view! { <RecommendationCard recommendation=item /> }
                                    />
                                </div>
                            }
                                .into_any()
                        }
                        MatchPhase::Failed(message) => {
                            view! { <Alert kind=AlertKind::Error message=message /> }.into_any()
                        }
                    }}
                </div>
            </RequireAuth>
        </AppShell>
    }
}

/// One ranked recommendation: score, narrative, and the labeled lists the
/// engine derived. Falls back to the posting id when the snapshot is missing.
#[component]
fn RecommendationCard(recommendation: JobRecommendation) -> impl IntoView {
    let heading = recommendation
        .job_details
        .as_ref()
        .map(|job| job.job_title.clone())
        .unwrap_or_else(|| format!("Posting #{}", recommendation.job_id));
    let subheading = recommendation
        .job_details
        .as_ref()
        .map(|job| format!("{} | {}", job.company_name, job.location));
    let requirements = recommendation
        .job_details
        .as_ref()
        .map(|job| job.requirements.clone())
        .unwrap_or_default();
    let responsibilities = recommendation
        .job_details
        .as_ref()
        .map(|job| job.responsibilities.clone())
        .unwrap_or_default();

    view! {
        <div class="bg-white border border-gray-200 rounded-lg p-5 space-y-4">
            <div>
                <h2 class="text-lg font-semibold text-gray-900">{heading}</h2>
                {subheading.map(|text| view! { <p class="text-sm text-gray-500">{text}</p> })}
            </div>

            <ScoreBar score=recommendation.match_score />

            <p class="text-sm text-gray-700">{recommendation.match_analysis}</p>

            <TagList
                label="Advantages"
                items=recommendation.advantages
                tag_class="inline-block rounded bg-green-100 px-2 py-0.5 text-xs text-green-800"
            />
            <TagList
                label="Challenges"
                items=recommendation.challenges
                tag_class="inline-block rounded bg-amber-100 px-2 py-0.5 text-xs text-amber-800"
            />
            <TagList
                label="Suggestions"
                items=recommendation.suggestions
                tag_class="inline-block rounded bg-sky-100 px-2 py-0.5 text-xs text-sky-800"
            />

            <DetailList label="Requirements" items=requirements />
            <DetailList label="Responsibilities" items=responsibilities />
        </div>
    }
}

#[component]
fn TagList(
    label: &'static str,
    items: Vec<String>,
    tag_class: &'static str,
) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class="space-y-1">
                <h3 class="text-xs font-medium uppercase tracking-wide text-gray-500">{label}</h3>
                <div class="flex flex-wrap gap-1.5">
                    {items
                        .into_iter()
                        .map(|item| view! { <span class=tag_class>{item}</span> })
                        .collect_view()}
                </div>
            </div>
        }
    })
}

#[component]
fn DetailList(label: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class="space-y-1">
                <h3 class="text-xs font-medium uppercase tracking-wide text-gray-500">{label}</h3>
                <ul class="list-disc ml-5 text-sm text-gray-700 space-y-0.5">
                    {items
                        .into_iter()
                        .map(|item| view! { <li>{item}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    })
}
