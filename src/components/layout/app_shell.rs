//! Shared layout wrapper with navigation and content container. It centralizes
//! header markup and the mobile menu toggle so routes can focus on content.
//! Navigation remains client-side; backend routes must enforce access control.

use crate::features::auth::state::use_session;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location, hooks::use_navigate};

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let session = use_session();
    let access = session.access_level;
    let navigate = use_navigate();
    let location = use_location();
    let on_login = move || location.pathname.get() == "/login";

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="bg-white border-b border-gray-200">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-2"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="text-lg font-semibold text-gray-900 whitespace-nowrap">
                            "Job Admin"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:items-center md:space-x-6 md:mt-0 md:border-0 md:bg-white">
                            <Show
                                when=move || access.get().is_authenticated()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <Show when=move || !on_login()>
                                                <A
                                                    href="/login"
                                                    {..}
                                                    class="block py-2 px-3 text-gray-700 rounded hover:bg-gray-100 md:hover:bg-transparent md:p-0 md:hover:text-blue-700"
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    "Sign In"
                                                </A>
                                            </Show>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <A
                                        href="/jobs"
                                        {..}
                                        class="block py-2 px-3 text-gray-700 rounded hover:bg-gray-100 md:hover:bg-transparent md:p-0 md:hover:text-blue-700"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Jobs"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href="/match"
                                        {..}
                                        class="block py-2 px-3 text-gray-700 rounded hover:bg-gray-100 md:hover:bg-transparent md:p-0 md:hover:text-blue-700"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Match Jobs"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href="/profile"
                                        {..}
                                        class="block py-2 px-3 text-gray-700 rounded hover:bg-gray-100 md:hover:bg-transparent md:p-0 md:hover:text-blue-700"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Profile"
                                    </A>
                                </li>
                                <Show when=move || access.get().is_privileged()>
                                    <li>
                                        <A
                                            href="/jobs/create"
                                            {..}
                                            class="block py-2 px-3 text-gray-700 rounded hover:bg-gray-100 md:hover:bg-transparent md:p-0 md:hover:text-blue-700"
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            "Create Job"
                                        </A>
                                    </li>
                                </Show>
                                <li class="hidden md:block text-sm text-gray-400">
                                    {move || session.identity().unwrap_or_default()}
                                </li>
                                <li>
                                    <button
                                        type="button"
                                        class="block py-2 px-3 text-gray-700 rounded hover:bg-gray-100 md:hover:bg-transparent md:p-0 md:hover:text-blue-700"
                                        on:click={
                                            let navigate = navigate.clone();
                                            move |_| {
                                                session.sign_out();
                                                set_menu_open.set(false);
                                                navigate("/login", Default::default());
                                            }
                                        }
                                    >
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
        </div>
    }
}
