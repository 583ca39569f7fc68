//! Dark mode toggle and preference restore.
//!
//! The active theme lives in two places: the `dark-mode` marker class on the
//! `<html>` element (what CSS keys off) and the `theme` entry in
//! `localStorage` (what survives a reload). `toggle` flips the class and then
//! writes the resulting label; `restore` goes the other way on page load.
//!
//! ERROR HANDLING
//! ==============
//! The class flip happens before the storage write. A failed write is
//! reported to the caller but the page keeps the new theme, so the visible
//! state and the stored preference can disagree until the next successful
//! toggle. Nothing is retried.
//!
//! The browser bindings are hydrate-only; SSR builds see stubs so server
//! rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use std::fmt;

/// `localStorage` key holding the persisted theme label.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class on the document root that marks dark mode as active.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Inline `<head>` script that applies a stored dark preference before first
/// paint, ahead of the WASM bundle. Mirrors [`restore`] for the dark case;
/// storage errors leave the page light.
pub const THEME_BOOTSTRAP_SCRIPT: &str = "try{if(localStorage.getItem(\"theme\")===\"dark\")\
document.documentElement.classList.add(\"dark-mode\")}catch(e){}";

/// Theme selected by the marker class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme implied by the presence of the marker class.
    pub fn from_marker(present: bool) -> Self {
        if present { Self::Dark } else { Self::Light }
    }

    /// Theme implied by a stored label. Anything but `"dark"` reads as light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Label written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while toggling or restoring the theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DarkModeError {
    #[error("no browser window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no root element")]
    NoRootElement,

    /// `localStorage` is disabled or blocked for this origin.
    #[error("local storage unavailable")]
    StorageUnavailable,

    #[error("class list update failed: {0}")]
    ClassList(String),

    #[error("storage read failed: {0}")]
    StorageRead(String),

    /// Typically a quota error.
    #[error("storage write failed: {0}")]
    StorageWrite(String),
}

/// Element whose class list carries the dark mode marker.
pub trait MarkerClass {
    /// Flip the marker in one step and report whether it is present afterwards.
    fn toggle_marker(&mut self) -> Result<bool, DarkModeError>;

    /// Force the marker on or off.
    fn set_marker(&mut self, present: bool) -> Result<(), DarkModeError>;
}

/// Key-value store holding the persisted theme label.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, DarkModeError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), DarkModeError>;
}

/// Flip the marker class on `root` and persist the resulting theme.
///
/// The stored label is written unconditionally, whatever `store` held
/// before, including values that are neither `dark` nor `light`.
///
/// # Errors
///
/// Returns an error if the class list cannot be updated (nothing changed)
/// or if the write fails (the class flip has already happened).
pub fn toggle<R, S>(root: &mut R, store: &mut S) -> Result<Theme, DarkModeError>
where
    R: MarkerClass + ?Sized,
    S: PreferenceStore + ?Sized,
{
    let theme = Theme::from_marker(root.toggle_marker()?);
    store.write(THEME_STORAGE_KEY, theme.as_str())?;
    Ok(theme)
}

/// Apply the stored preference to `root` without writing storage.
///
/// A missing, unreadable, or unrecognized label restores light mode.
///
/// # Errors
///
/// Returns an error only if the class list cannot be updated.
pub fn restore<R, S>(root: &mut R, store: &S) -> Result<Theme, DarkModeError>
where
    R: MarkerClass + ?Sized,
    S: PreferenceStore + ?Sized,
{
    let stored = store.read(THEME_STORAGE_KEY).unwrap_or(None);
    let theme = Theme::from_stored(stored.as_deref());
    root.set_marker(theme.is_dark())?;
    Ok(theme)
}

/// Toggle dark mode on the current document.
///
/// # Errors
///
/// See [`toggle`]. Also fails when no window, document, or root element is
/// available, which is always the case outside the browser.
pub fn toggle_dark_mode() -> Result<Theme, DarkModeError> {
    #[cfg(feature = "hydrate")]
    {
        let mut root = browser::DocumentRoot::current()?;
        let mut store = browser::LocalStorage::current()?;
        toggle(&mut root, &mut store)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(DarkModeError::NoWindow)
    }
}

/// Restore the persisted theme onto the current document.
///
/// Returns the applied theme, or light mode when there is no document to
/// apply it to.
pub fn restore_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let applied = browser::DocumentRoot::current().and_then(|mut root| {
            let store = browser::LocalStorage::current()?;
            restore(&mut root, &store)
        });
        match applied {
            Ok(theme) => theme,
            Err(e) => {
                leptos::logging::warn!("dark mode restore failed: {e}");
                Theme::Light
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Current marker state of the document root, `false` outside the browser.
pub fn is_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        browser::DocumentRoot::current().is_ok_and(|root| root.has_marker())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use super::{DARK_MODE_CLASS, DarkModeError, MarkerClass, PreferenceStore};

    fn js_message(value: &wasm_bindgen::JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }

    /// The `<html>` element of the current document.
    pub struct DocumentRoot(web_sys::Element);

    impl DocumentRoot {
        pub fn current() -> Result<Self, DarkModeError> {
            let window = web_sys::window().ok_or(DarkModeError::NoWindow)?;
            let document = window.document().ok_or(DarkModeError::NoDocument)?;
            let root = document.document_element().ok_or(DarkModeError::NoRootElement)?;
            Ok(Self(root))
        }

        pub fn has_marker(&self) -> bool {
            self.0.class_list().contains(DARK_MODE_CLASS)
        }
    }

    impl MarkerClass for DocumentRoot {
        fn toggle_marker(&mut self) -> Result<bool, DarkModeError> {
            self.0
                .class_list()
                .toggle(DARK_MODE_CLASS)
                .map_err(|e| DarkModeError::ClassList(js_message(&e)))
        }

        fn set_marker(&mut self, present: bool) -> Result<(), DarkModeError> {
            self.0
                .class_list()
                .toggle_with_force(DARK_MODE_CLASS, present)
                .map(|_| ())
                .map_err(|e| DarkModeError::ClassList(js_message(&e)))
        }
    }

    /// `window.localStorage`, resolved on each access so an unavailable
    /// store only fails the step that needs it.
    pub struct LocalStorage(web_sys::Window);

    impl LocalStorage {
        pub fn current() -> Result<Self, DarkModeError> {
            web_sys::window().map(Self).ok_or(DarkModeError::NoWindow)
        }

        fn storage(&self) -> Result<web_sys::Storage, DarkModeError> {
            match self.0.local_storage() {
                Ok(Some(storage)) => Ok(storage),
                Ok(None) | Err(_) => Err(DarkModeError::StorageUnavailable),
            }
        }
    }

    impl PreferenceStore for LocalStorage {
        fn read(&self, key: &str) -> Result<Option<String>, DarkModeError> {
            self.storage()?
                .get_item(key)
                .map_err(|e| DarkModeError::StorageRead(js_message(&e)))
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), DarkModeError> {
            self.storage()?
                .set_item(key, value)
                .map_err(|e| DarkModeError::StorageWrite(js_message(&e)))
        }
    }
}
