use leptos::prelude::*;

/// Primary action button. Disable it while a workflow is in flight so a
/// double click cannot fire a duplicate request.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");

    view! {
        <button
            type=button_type
            class="rounded-md bg-blue-600 px-5 py-2 text-sm font-medium text-white hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-300"
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-60=move || disabled.get()
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
