//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! `dark_mode` mirrors the `<html>` marker class so reactive views (the
//! toggle glyph) can follow it. The class itself stays the source of truth;
//! this field is refreshed from every toggle result.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::dark_mode::{DarkModeError, Theme};

/// UI state shared through context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    pub fn from_theme(theme: Theme) -> Self {
        Self { dark_mode: theme.is_dark() }
    }

    /// State after a toggle attempt. A failed toggle may or may not have
    /// flipped the class, so the marker is re-read instead of trusted.
    pub fn after_toggle(result: &Result<Theme, DarkModeError>, marker_present: impl FnOnce() -> bool) -> Self {
        match result {
            Ok(theme) => Self::from_theme(*theme),
            Err(_) => Self::from_theme(Theme::from_marker(marker_present())),
        }
    }

    /// Glyph for the toggle button: offers the theme you would switch to.
    pub fn toggle_glyph(&self) -> &'static str {
        if self.dark_mode { "☀" } else { "☾" }
    }

    pub fn toggle_title(&self) -> &'static str {
        if self.dark_mode { "Switch to light mode" } else { "Switch to dark mode" }
    }
}
