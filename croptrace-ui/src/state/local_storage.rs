//! Browser `localStorage` behind the session's key-value store

use croptrace::{KeyValueStore, MemoryStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// `localStorage` when the browser grants it, otherwise an in-memory map
/// that lasts for the page's lifetime
pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match local_storage() {
            Ok(storage) => BrowserStore::Local(storage),
            Err(e) => {
                tracing::warn!("{}; session will not survive a reload", e);
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

fn local_storage() -> StorageResult<web_sys::Storage> {
    let window = web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;

    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable("localStorage disabled".to_string())),
        Err(e) => Err(StorageError::Unavailable(js_message(&e))),
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        match self {
            BrowserStore::Local(storage) => storage
                .get_item(key)
                .map_err(|e| StorageError::Unavailable(js_message(&e))),
            BrowserStore::Memory(store) => store.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        match self {
            BrowserStore::Local(storage) => {
                storage.set_item(key, value).map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    reason: js_message(&e),
                })
            }
            BrowserStore::Memory(store) => store.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        match self {
            BrowserStore::Local(storage) => {
                storage.remove_item(key).map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    reason: js_message(&e),
                })
            }
            BrowserStore::Memory(store) => store.remove_item(key),
        }
    }
}
