use std::collections::HashMap;

/// String key/value persistence seam.
///
/// Hosts adapt whatever the platform offers (browser local/session storage,
/// a settings file, nothing at all). Implementations must not panic on
/// failure: a backend that cannot write reports `false` from `set`, and the
/// stores treat unreadable state as absent.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;

    /// Returns `false` when the value could not be persisted.
    fn set(&mut self, key: &str, value: &str) -> bool;

    fn remove(&mut self, key: &str);
}

/// In-memory backend for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.entries.insert(key.to_owned(), value.to_owned());
        true
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
