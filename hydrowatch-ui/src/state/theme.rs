//! Theme persistence and application
//!
//! The preference lives in `localStorage`; applying it toggles the `dark`
//! class on `<html>` so Tailwind's `dark:` variants take effect.

use hydrowatch::theme::{ThemeError, ThemeStore, THEME_STORAGE_KEY};
use hydrowatch::ThemePreference;

/// `window.localStorage` backed theme store
pub struct LocalStorageThemeStore;

impl LocalStorageThemeStore {
    fn storage() -> Result<web_sys::Storage, ThemeError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| ThemeError::Unavailable("localStorage not accessible".to_string()))
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Result<Option<String>, ThemeError> {
        Self::storage()?
            .get_item(THEME_STORAGE_KEY)
            .map_err(|_| ThemeError::Unavailable("localStorage read failed".to_string()))
    }

    fn save(&self, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|_| ThemeError::Unavailable("localStorage write failed".to_string()))
    }
}

/// Reflect the preference on the document root
pub fn apply_theme(theme: ThemePreference) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    let Some(root) = root else {
        web_sys::console::warn_1(&"No document root to apply the theme to".into());
        return;
    };

    if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        web_sys::console::error_1(&format!("Failed to apply {} theme: {:?}", theme, e).into());
    }
}
