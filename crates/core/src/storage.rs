//! Key-value persistence seam
//!
//! The browser backs this with `localStorage`; tests and privacy-mode
//! browsers (where `localStorage` throws) use [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal string store, shaped like the Web Storage API
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::with_entry("k", "a");
        store.set("k", "b");
        assert_eq!(store.get("k").as_deref(), Some("b"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_missing_key() {
        let store = MemoryStore::new();
        assert!(store.get("nope").is_none());
        assert!(store.is_empty());
    }
}
