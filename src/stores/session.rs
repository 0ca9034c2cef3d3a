use tracing::warn;

use crate::stores::storage::StorageBackend;

pub const INTRO_COMPLETE_KEY: &str = "atelier-intro-complete";
pub const FAVORITES_HINT_KEY: &str = "atelier-favorites-hint-dismissed";

/// Session-scoped one-shot flags: the intro sequence and the favorites
/// hint each show once per browsing session. The backend is expected to be
/// session-scoped storage, so the flags reset when the session ends.
#[derive(Debug)]
pub struct SessionFlags<S: StorageBackend> {
    storage: S,
    intro_complete: bool,
    hint_dismissed: bool,
}

impl<S: StorageBackend> SessionFlags<S> {
    pub fn load(storage: S) -> Self {
        let intro_complete = flag(&storage, INTRO_COMPLETE_KEY);
        let hint_dismissed = flag(&storage, FAVORITES_HINT_KEY);
        Self {
            storage,
            intro_complete,
            hint_dismissed,
        }
    }

    #[must_use]
    pub fn intro_complete(&self) -> bool {
        self.intro_complete
    }

    pub fn mark_intro_complete(&mut self) {
        self.intro_complete = true;
        if !self.storage.set(INTRO_COMPLETE_KEY, "true") {
            warn!("intro flag not persisted");
        }
    }

    pub fn reset_intro(&mut self) {
        self.intro_complete = false;
        self.storage.remove(INTRO_COMPLETE_KEY);
    }

    #[must_use]
    pub fn favorites_hint_dismissed(&self) -> bool {
        self.hint_dismissed
    }

    pub fn dismiss_favorites_hint(&mut self) {
        self.hint_dismissed = true;
        if !self.storage.set(FAVORITES_HINT_KEY, "true") {
            warn!("favorites hint flag not persisted");
        }
    }

    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn flag(storage: &impl StorageBackend, key: &str) -> bool {
    storage.get(key).as_deref() == Some("true")
}
