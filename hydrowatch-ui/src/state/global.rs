//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use hydrowatch::model::{DescriptiveInfo, SeriesData, StatusData};
use hydrowatch::ThemePreference;

use crate::api;
use crate::state::theme::{apply_theme, LocalStorageThemeStore};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Marketing copy, `None` while loading (or after a failed fetch)
    pub info: RwSignal<Option<DescriptiveInfo>>,
    /// Energy consumption series
    pub energy: RwSignal<Option<SeriesData>>,
    /// Water quality series
    pub quality: RwSignal<Option<SeriesData>>,
    /// Plant status breakdown
    pub status: RwSignal<Option<StatusData>>,
    /// Current color scheme
    pub theme: RwSignal<ThemePreference>,
    /// Contact panel slid in
    pub contact_open: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let theme = hydrowatch::theme::load_preference(&LocalStorageThemeStore).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Ignoring stored theme, using light: {}", e).into());
        ThemePreference::default()
    });
    apply_theme(theme);

    let state = GlobalState {
        info: create_rw_signal(None),
        energy: create_rw_signal(None),
        quality: create_rw_signal(None),
        status: create_rw_signal(None),
        theme: create_rw_signal(theme),
        contact_open: create_rw_signal(false),
    };

    provide_context(state);
    state
}

impl GlobalState {
    /// Start the four section fetches.
    ///
    /// Each request runs in its own task and only ever touches its own
    /// signal, so a slow or failing section never holds up the others.
    pub fn load_all(&self) {
        let info = self.info;
        spawn_local(async move {
            match api::fetch_info().await {
                Ok(data) => info.set(Some(data)),
                Err(e) => log_fetch_error("info", &e),
            }
        });

        let energy = self.energy;
        spawn_local(async move {
            match api::fetch_energy().await {
                Ok(data) => energy.set(Some(data)),
                Err(e) => log_fetch_error("energy", &e),
            }
        });

        let quality = self.quality;
        spawn_local(async move {
            match api::fetch_quality().await {
                Ok(data) => quality.set(Some(data)),
                Err(e) => log_fetch_error("quality", &e),
            }
        });

        let status = self.status;
        spawn_local(async move {
            match api::fetch_status().await {
                Ok(data) => status.set(Some(data)),
                Err(e) => log_fetch_error("status", &e),
            }
        });
    }

    /// Flip the theme, apply it and remember it
    pub fn toggle_theme(&self) {
        let current = self.theme.get_untracked();
        let next = match hydrowatch::theme::toggle_preference(&LocalStorageThemeStore, current) {
            Ok(next) => next,
            Err(e) => {
                web_sys::console::warn_1(&format!("Theme not saved: {}", e).into());
                current.toggled()
            }
        };
        apply_theme(next);
        self.theme.set(next);
    }

    pub fn open_contact(&self) {
        self.contact_open.set(true);
    }

    pub fn close_contact(&self) {
        self.contact_open.set(false);
    }
}

fn log_fetch_error(section: &str, error: &str) {
    web_sys::console::error_1(&format!("Failed to fetch {}: {}", section, error).into());
}
