//! App-level settings store
//!
//! Centralized, app-wide settings store. All windows share this single
//! source of truth, so a settings change made anywhere is seen everywhere.

use gpui::{App, BorrowAppContext, Global, Subscription};

use stencil_config::{load_settings, save_settings, Settings};

/// App-level settings store implementing GPUI's Global trait.
///
/// There is exactly one instance of this per application process.
pub struct SettingsStore {
    settings: Settings,
}

impl Global for SettingsStore {}

impl SettingsStore {
    /// Create a new settings store, loading from disk.
    pub fn new() -> Self {
        Self {
            settings: load_settings(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Save the current settings to disk.
    pub fn save(&self) {
        if let Err(e) = save_settings(&self.settings) {
            log::warn!("failed to save settings: {}", e);
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Convenience functions for accessing the global store
// ============================================================================

/// Initialize the global settings store. Call this once at app startup.
pub fn init_settings_store(cx: &mut App) {
    cx.set_global(SettingsStore::new());
}

/// Get a reference to the user settings from the global store.
///
/// Panics if `init_settings_store` hasn't been called.
pub fn user_settings(cx: &App) -> &Settings {
    cx.global::<SettingsStore>().settings()
}

/// Update the user settings in the global store.
///
/// Changes are saved to disk and observers are notified.
pub fn update_user_settings<F, R>(cx: &mut App, f: F) -> R
where
    F: FnOnce(&mut Settings) -> R,
{
    cx.update_global::<SettingsStore, _>(|store, _cx| {
        let result = f(store.settings_mut());
        store.save();
        result
    })
}

/// Subscribe to settings changes.
///
/// Returns a Subscription that must be held to keep the observer active.
pub fn observe_settings<F>(cx: &mut App, f: F) -> Subscription
where
    F: FnMut(&mut App) + 'static,
{
    cx.observe_global::<SettingsStore>(f)
}
