pub mod auth;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let runtime = config::runtime_config();
    if let Err(err) = console_log::init_with_level(runtime.log_level()) {
        web_sys::console::warn_1(&format!("logger already initialised: {}", err).into());
    }
    log::info!(
        "Starting Tour Manager frontend (login delay {:?})",
        runtime.login_delay().as_duration()
    );
    router::mount_app();
}
