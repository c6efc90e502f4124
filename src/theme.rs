//! Theme Preference
//!
//! Light/dark preference read once at startup and changed only by an
//! explicit toggle. Storage is pluggable: the browser keeps it in
//! `localStorage`, the native tools in a small file.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// `localStorage` key holding the preference in the browser
pub const THEME_STORAGE_KEY: &str = "hydrowatch_theme";

/// UI color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(ThemeError::InvalidValue(other.to_string())),
        }
    }
}

/// Theme storage errors
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Invalid theme value: {0:?} (expected \"light\" or \"dark\")")]
    InvalidValue(String),

    #[error("Theme storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistent slot for the raw preference string
pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>, ThemeError>;
    fn save(&self, value: &str) -> Result<(), ThemeError>;
}

/// Stored preference, light when nothing is stored. Unreadable storage and
/// unknown values are errors so the caller can report them.
pub fn load_preference(store: &impl ThemeStore) -> Result<ThemePreference, ThemeError> {
    match store.load()? {
        Some(raw) => raw.parse(),
        None => Ok(ThemePreference::default()),
    }
}

/// Read the stored preference, defaulting to light when nothing usable is
/// stored or the store cannot be read
pub fn read_preference(store: &impl ThemeStore) -> ThemePreference {
    load_preference(store).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring stored theme, using light");
        ThemePreference::default()
    })
}

/// Persist an explicit choice
pub fn write_preference(store: &impl ThemeStore, theme: ThemePreference) -> Result<(), ThemeError> {
    store.save(theme.as_str())?;
    tracing::debug!(theme = %theme, "Theme saved");
    Ok(())
}

/// Flip `current`, persist and return the new preference
pub fn toggle_preference(
    store: &impl ThemeStore,
    current: ThemePreference,
) -> Result<ThemePreference, ThemeError> {
    let next = current.toggled();
    write_preference(store, next)?;
    Ok(next)
}

#[cfg(feature = "native")]
pub use file_store::FileThemeStore;

#[cfg(feature = "native")]
mod file_store {
    use super::{ThemeError, ThemeStore};
    use std::path::{Path, PathBuf};

    const THEME_FILE_NAME: &str = "theme";

    /// Preference kept in a one-line text file
    #[derive(Debug, Clone)]
    pub struct FileThemeStore {
        path: PathBuf,
    }

    impl FileThemeStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<config_dir>/hydrowatch/theme`
        pub fn default_path() -> PathBuf {
            dirs::config_dir()
                .map(|p| p.join("hydrowatch"))
                .unwrap_or_else(|| PathBuf::from("."))
                .join(THEME_FILE_NAME)
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl ThemeStore for FileThemeStore {
        fn load(&self) -> Result<Option<String>, ThemeError> {
            match std::fs::read_to_string(&self.path) {
                Ok(content) => Ok(Some(content.trim().to_string())),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn save(&self, value: &str) -> Result<(), ThemeError> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&self.path, value)?;
            Ok(())
        }
    }
}
