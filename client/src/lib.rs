//! # client
//!
//! Leptos + WASM frontend for the nightlight site: pages, the site header
//! with its dark mode toggle, the contact form client, and the browser
//! glue that persists the theme in `localStorage`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: restore the saved theme, then hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }

    let theme = util::dark_mode::restore_preference();
    log::debug!("restored theme: {theme}");

    leptos::mount::hydrate_body(app::App);
}

/// `toggleDarkMode()` for plain script callers. Returns the new theme label;
/// a storage failure surfaces as a thrown exception after the class flip.
///
/// # Errors
///
/// Throws the [`util::dark_mode::DarkModeError`] message.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode_js() -> Result<String, wasm_bindgen::JsValue> {
    util::dark_mode::toggle_dark_mode()
        .map(|theme| theme.as_str().to_owned())
        .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))
}
