mod app;
#[path = "lib/mod.rs"]
mod app_lib;
mod components;
mod features;
mod routes;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    use crate::app::App;
    use leptos::prelude::mount_to_body;

    console_error_panic_hook::set_once();
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
