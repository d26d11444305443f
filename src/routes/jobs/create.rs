//! Posting-creation route, privileged only. The visitor pastes raw
//! description text; the backend parses title, responsibilities, and
//! requirements out of it.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::RequireAdmin;
use crate::features::jobs::client;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const MIN_DESCRIPTION_CHARS: usize = 50;

/// Local check before the parse request. Counting characters rather than
/// bytes keeps the limit meaningful for non-ASCII descriptions.
fn check_description(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Description text is required.".to_string());
    }
    if text.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(format!(
            "Description text needs at least {MIN_DESCRIPTION_CHARS} characters."
        ));
    }
    Ok(())
}

#[component]
pub fn CreateJobPage() -> impl IntoView {
    let navigate = use_navigate();
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let create_action = Action::new_local(move |text: &String| {
        let text = text.clone();
        async move { client::create_job(text).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(response) => navigate(&paths::job_detail(response.job_id), Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let text = description.get_untracked();
        if let Err(message) = check_description(&text) {
            set_error.set(Some(AppError::Validation(message)));
            return;
        }

        create_action.dispatch(text);
    };

    view! {
        <AppShell>
            <RequireAdmin>
                <form class="max-w-2xl mx-auto space-y-5" on:submit=on_submit>
                    <div class="space-y-1">
                        <h1 class="text-2xl font-semibold text-gray-900">"Create Job"</h1>
                        <p class="text-sm text-gray-500">
                            "Paste the full description text; title, responsibilities, and requirements are parsed automatically."
                        </p>
                    </div>

                    <textarea
                        rows="15"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 font-mono"
                        placeholder="Paste the complete job description here..."
                        on:input=move |event| set_description.set(event_target_value(&event))
                    ></textarea>

                    <Button button_type="submit" disabled=create_action.pending()>
                        "Create Job"
                    </Button>
                    {move || {
                        create_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-2"><Spinner /></div> })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! {
                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                }
                            })
                    }}
                </form>
            </RequireAdmin>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use super::check_description;

    #[test]
    fn empty_text_is_rejected() {
        assert!(check_description("").is_err());
        assert!(check_description("   \n ").is_err());
    }

    #[test]
    fn short_text_is_rejected() {
        assert!(check_description("too short").is_err());
    }

    #[test]
    fn characters_count_not_bytes() {
        let text = "岗".repeat(50);
        assert!(check_description(&text).is_ok());
    }

    #[test]
    fn long_enough_text_passes() {
        let text = "Backend engineer wanted to build and operate our payments platform.";
        assert!(check_description(text).is_ok());
    }
}
