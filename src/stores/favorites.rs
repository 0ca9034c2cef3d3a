use tracing::warn;

use crate::stores::storage::StorageBackend;

pub const FAVORITES_STORAGE_KEY: &str = "atelier-favorites";

/// Ordered, de-duplicated set of favorited artwork ids.
///
/// Every mutation persists through the injected backend. Unreadable or
/// corrupt saved state loads as an empty set (never an error), and write
/// failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct FavoritesStore<S: StorageBackend> {
    storage: S,
    ids: Vec<String>,
}

impl<S: StorageBackend> FavoritesStore<S> {
    pub fn load(storage: S) -> Self {
        let ids = storage
            .get(FAVORITES_STORAGE_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .unwrap_or_default();

        let mut store = Self { storage, ids };
        store.dedup();
        store
    }

    fn dedup(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.ids.retain(|id| seen.insert(id.clone()));
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.ids) {
            Ok(raw) => {
                if !self.storage.set(FAVORITES_STORAGE_KEY, &raw) {
                    warn!("favorites not persisted; continuing with in-memory state");
                }
            }
            Err(err) => warn!(%err, "favorites serialization failed"),
        }
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_favorite(&self, artwork_id: &str) -> bool {
        self.ids.iter().any(|id| id == artwork_id)
    }

    pub fn add(&mut self, artwork_id: &str) {
        if !self.is_favorite(artwork_id) {
            self.ids.push(artwork_id.to_owned());
            self.persist();
        }
    }

    pub fn remove(&mut self, artwork_id: &str) {
        let before = self.ids.len();
        self.ids.retain(|id| id != artwork_id);
        if self.ids.len() != before {
            self.persist();
        }
    }

    /// Returns whether the artwork is a favorite after the toggle.
    pub fn toggle(&mut self, artwork_id: &str) -> bool {
        if self.is_favorite(artwork_id) {
            self.remove(artwork_id);
            false
        } else {
            self.add(artwork_id);
            true
        }
    }

    pub fn clear(&mut self) {
        if !self.ids.is_empty() {
            self.ids.clear();
            self.persist();
        }
    }

    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}
