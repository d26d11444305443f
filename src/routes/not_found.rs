//! 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4 space-y-4">
                <h1 class="text-7xl font-black text-gray-200 select-none">"404"</h1>
                <p class="text-xl font-semibold text-gray-900">"Page not found"</p>
                <p class="text-sm text-gray-500 max-w-sm">
                    "The page you requested does not exist."
                </p>
                <A
                    href="/"
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-600 rounded-lg hover:bg-blue-700"
                >
                    "Go Home"
                </A>
            </div>
        </AppShell>
    }
}
