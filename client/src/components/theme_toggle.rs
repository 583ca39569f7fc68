//! Dark mode toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode::{self, Theme};

/// Button that flips the `<html>` dark mode marker and persists the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // SSR always renders light; pick up whatever `hydrate` restored.
    Effect::new(move |_| {
        ui.set(UiState::from_theme(Theme::from_marker(dark_mode::is_dark())));
    });

    let on_toggle = move |_| {
        let result = dark_mode::toggle_dark_mode();
        if let Err(e) = &result {
            leptos::logging::error!("dark mode toggle failed: {e}");
        }
        ui.set(UiState::after_toggle(&result, dark_mode::is_dark));
    };

    view! {
        <button
            class="btn theme-toggle"
            type="button"
            on:click=on_toggle
            title=move || ui.get().toggle_title()
            aria-label=move || ui.get().toggle_title()
        >
            {move || ui.get().toggle_glyph()}
        </button>
    }
}
