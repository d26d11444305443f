//! Profile route: account details, the resume editor, and the parsed
//! analysis. The analysis payload has no fixed shape, so it renders through a
//! small recursive walker instead of per-field markup.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::profile::analysis::{humanize_key, AnalysisNode};
use crate::features::profile::client;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Renders one analysis node. Lists become bullets, groups become labeled
/// sub-sections, anything else renders inline.
fn render_node(node: &AnalysisNode) -> AnyView {
    match node {
        AnalysisNode::Items(items) => view! {
            <ul class="list-disc ml-5 space-y-0.5">
                {items
                    .iter()
                    .map(|item| view! { <li>{render_node(item)}</li> })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        AnalysisNode::Group(group) => view! {
            <div class="space-y-2">
                {group
                    .iter()
                    .map(|(key, value)| {
                        view! {
                            <div>
                                <div class="text-xs font-medium uppercase tracking-wide text-gray-500">
                                    {humanize_key(key)}
                                </div>
                                {render_node(value)}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        scalar => view! {
            <span class="text-sm text-gray-700">{scalar.scalar_text().unwrap_or_default()}</span>
        }
        .into_any(),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = LocalResource::new(move || async move { client::get_profile().await });
    let (resume_text, set_resume_text) = signal(String::new());
    let (notice, set_notice) = signal::<Option<(AlertKind, String)>>(None);

    // Prefill the editor whenever a profile arrives, including after a save.
    Effect::new(move |_| {
        if let Some(Ok(loaded)) = profile.get() {
            if let Some(text) = loaded.resume_text {
                set_resume_text.set(text);
            }
        }
    });

    let update_action = Action::new_local(move |text: &String| {
        let text = text.clone();
        async move { client::update_resume(text).await }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(response) => {
                    set_notice.set(Some((AlertKind::Success, response.message)));
                    profile.refetch();
                }
                Err(err) => set_notice.set(Some((AlertKind::Error, err.to_string()))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_notice.set(None);

        let text = resume_text.get_untracked();
        if text.trim().is_empty() {
            set_notice.set(Some((AlertKind::Error, "Resume text is required.".to_string())));
            return;
        }

        update_action.dispatch(text);
    };

    view! {
        <AppShell>
            <RequireAuth>
                <div class="max-w-3xl mx-auto space-y-6">
                    <h1 class="text-2xl font-semibold text-gray-900">"Profile"</h1>

                    <Suspense fallback=move || view! { <Spinner /> }>
                        {move || match profile.get() {
                            Some(Ok(loaded)) => {
                                let name = loaded.name.clone().unwrap_or_else(|| "Not set".to_string());
                                let analysis = loaded.resume_parsed_data.clone();
                                view! {
                                    <div class="space-y-6">
                                        <div class="bg-white border border-gray-200 rounded-lg p-5 space-y-2">
                                            <div class="text-sm text-gray-700">
                                                <span class="font-medium">"Email: "</span>
                                                {loaded.email}
                                            </div>
                                            <div class="text-sm text-gray-700">
                                                <span class="font-medium">"Name: "</span>
                                                {name}
                                            </div>
                                        </div>

                                        <form
                                            class="bg-white border border-gray-200 rounded-lg p-5 space-y-4"
                                            on:submit=on_submit
                                        >
                                            <div class="space-y-1">
                                                <h2 class="text-lg font-semibold text-gray-900">"Resume"</h2>
                                                <p class="text-sm text-gray-500">
                                                    "Saved text is analyzed automatically and drives job matching."
                                                </p>
                                            </div>
                                            <textarea
                                                rows="10"
                                                class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5"
                                                placeholder="Paste your resume text here..."
                                                prop:value=move || resume_text.get()
                                                on:input=move |event| set_resume_text.set(event_target_value(&event))
                                            ></textarea>
                                            <Button button_type="submit" disabled=update_action.pending()>
                                                "Save Resume"
                                            </Button>
                                            {move || {
                                                update_action
                                                    .pending()
                                                    .get()
                                                    .then_some(view! { <span class="ml-3"><Spinner /></span> })
                                            }}
                                            {move || {
                                                notice
                                                    .get()
                                                    .map(|(kind, message)| view! { <Alert kind=kind message=message /> })
                                            }}
                                        </form>

                                        <div class="bg-white border border-gray-200 rounded-lg p-5 space-y-4">
                                            <h2 class="text-lg font-semibold text-gray-900">"Resume Analysis"</h2>
                                            {match analysis {
                                                Some(node) => render_node(&node),
                                                None => view! {
                                                    <p class="text-sm text-gray-500">
                                                        "The analysis appears here once a resume is saved."
                                                    </p>
                                                }
                                                .into_any(),
                                            }}
                                        </div>
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
