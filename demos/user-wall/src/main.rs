#[cfg(target_arch = "wasm32")]
pub fn main() {
    tracing_wasm::set_as_global_default();
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(user_wall::app::App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
