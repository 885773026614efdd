//! Light/dark theme preference.
//!
//! Resolution on load: stored value → system `prefers-color-scheme` → light.
//! Toggling persists the new value and re-applies the document class.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::config::THEME_STORAGE_KEY;
use crate::core::{platform, storage};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Pick the effective theme from a stored value and the system preference.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Self {
        if let Some(theme) = stored.and_then(|raw| raw.parse().ok()) {
            return theme;
        }
        match system_prefers_dark {
            Some(true) => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme `{other}`")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads and writes the persisted theme. The UI only calls `load` once at the
/// root and `set` from the navbar toggle.
pub struct ThemeStore;

impl ThemeStore {
    pub fn load() -> Theme {
        let stored = storage::load_preference(THEME_STORAGE_KEY).unwrap_or_else(|err| {
            tracing::warn!(%err, "could not read stored theme");
            None
        });
        let theme = Theme::resolve(stored.as_deref(), platform::system_prefers_dark());
        platform::apply_document_theme(theme);
        theme
    }

    pub fn set(theme: Theme) {
        if let Err(err) = storage::save_preference(THEME_STORAGE_KEY, theme.as_str()) {
            tracing::warn!(%err, theme = theme.as_str(), "could not persist theme");
        }
        platform::apply_document_theme(theme);
    }
}
