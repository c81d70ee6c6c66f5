//! Dark mode preference and the storage it persists to.

use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Storage key holding the JSON-encoded preference.
pub const DARK_MODE_KEY: &str = "darkMode";
pub const DEFAULT_DARK_MODE: bool = false;
/// Class put on the document root while dark mode is on.
pub const DARK_CLASS: &str = "dark";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Preference storage is unavailable")]
    Unavailable,
}

/// Somewhere the dark mode flag can be kept between visits.
pub trait PreferenceStore {
    /// Stored value, or `None` when absent or unreadable.
    fn load(&self) -> Option<bool>;
    fn save(&self, enabled: bool) -> Result<(), PreferenceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DarkModePreference {
    enabled: bool,
}

impl Default for DarkModePreference {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_DARK_MODE,
        }
    }
}

impl DarkModePreference {
    pub fn load(store: &impl PreferenceStore) -> Self {
        Self {
            enabled: store.load().unwrap_or(DEFAULT_DARK_MODE),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn theme_class(&self) -> &'static str {
        if self.enabled {
            DARK_CLASS
        } else {
            ""
        }
    }

    /// Flips the preference and writes it back.
    ///
    /// A failed write is logged and otherwise ignored; the in-memory value
    /// still changes for the rest of the session.
    pub fn toggle(&mut self, store: &impl PreferenceStore) -> bool {
        self.enabled = !self.enabled;
        match store.save(self.enabled) {
            Ok(()) => log::debug!("dark mode set to {}", self.enabled),
            Err(e) => log::warn!("dark mode preference not persisted: {e}"),
        }
        self.enabled
    }
}

/// Process-local store keeping the raw JSON text, used for server rendering
/// where there is no browser storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// The stored text exactly as it would sit in browser storage.
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().ok()?.clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<bool> {
        let raw = self.raw()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, enabled: bool) -> Result<(), PreferenceError> {
        let encoded = serde_json::Value::Bool(enabled).to_string();
        let mut raw = self.raw.lock().map_err(|_| PreferenceError::Unavailable)?;
        *raw = Some(encoded);
        Ok(())
    }
}
