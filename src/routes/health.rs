use crate::app_lib::build_info;
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();
    let version = build_info::version();

    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="block max-w-[38rem] rounded-lg border border-gray-200 bg-white">
                    <div class="border-b border-gray-200 px-6 py-3 text-gray-600 font-semibold">
                        "Build Version"
                    </div>
                    <div class="p-6 space-y-2">
                        <pre class="text-center text-sm text-gray-900">{version}</pre>
                        <pre class="text-center text-sm text-gray-900">{commit}</pre>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
