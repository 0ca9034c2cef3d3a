use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::stores::storage::StorageBackend;

pub const THEME_STORAGE_KEY: &str = "atelier-theme-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Night,
}

impl ThemeMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Night => "night",
        }
    }

    fn from_saved(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "night" => Some(Self::Night),
            _ => None,
        }
    }
}

/// Light/night mode with injected persistence. Unknown saved values fall
/// back to light.
#[derive(Debug)]
pub struct ThemeStore<S: StorageBackend> {
    storage: S,
    mode: ThemeMode,
}

impl<S: StorageBackend> ThemeStore<S> {
    pub fn load(storage: S) -> Self {
        let mode = storage
            .get(THEME_STORAGE_KEY)
            .as_deref()
            .and_then(ThemeMode::from_saved)
            .unwrap_or_default();
        Self { storage, mode }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn is_night(&self) -> bool {
        self.mode == ThemeMode::Night
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if !self.storage.set(THEME_STORAGE_KEY, mode.as_str()) {
            warn!("theme mode not persisted");
        }
    }

    pub fn toggle(&mut self) -> ThemeMode {
        let next = match self.mode {
            ThemeMode::Light => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Light,
        };
        self.set_mode(next);
        next
    }

    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}
