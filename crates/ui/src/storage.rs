//! `localStorage` adapter

use neo_lux_core::{KeyValueStore, MemoryStore};
use web_sys::{Storage, Window};

pub struct LocalStore {
    storage: Storage,
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::warn!("localStorage write of {key} failed: {e:?}");
        }
    }
}

/// `localStorage` when the browser allows it, memory otherwise
pub fn open_store(win: &Window) -> Box<dyn KeyValueStore> {
    match win.local_storage() {
        Ok(Some(storage)) => Box::new(LocalStore { storage }),
        _ => {
            log::warn!("localStorage unavailable, preferences will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
