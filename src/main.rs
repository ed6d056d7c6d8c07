use log::info;

mod config;
mod dom;
mod styles;
mod phone {
    pub mod input;
    pub mod mask;
}
mod contact {
    pub mod error;
    pub mod form;
    pub mod response;
    pub mod submission;
}
mod components {
    pub mod cookie_banner;
    pub mod dropdown;
    pub mod header;
    pub mod mobile_menu;
    pub mod notification;
    pub mod reveal;
    pub mod smooth_scroll;
}

use contact::form::ContactForm;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Binds every component to the server-rendered page. Each one checks for
/// its own elements and stays inert when they are missing.
fn enhance_page() {
    info!("Enhancing page");
    styles::ensure_registered();
    components::cookie_banner::attach();
    components::mobile_menu::attach();
    ContactForm::attach();
    phone::input::attach();
    components::smooth_scroll::attach();
    components::header::attach();
    components::reveal::attach();
    components::dropdown::attach();
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting site scripts");
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        dom::listen_once(&document, "DOMContentLoaded", |_| enhance_page());
    } else {
        enhance_page();
    }
}
