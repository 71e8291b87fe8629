//! Persistence for the water level store in the browser.

use anyhow::anyhow;
use dwlr_store::{KeyValueStore, MemoryStore, SqliteStore};
use wasm_bindgen::JsValue;

/// Key-value storage backing the store.
///
/// `window.localStorage` when the browser grants it. Private browsing modes
/// and sandboxed frames can refuse it; the session then keeps its values in
/// an in-memory SQLite database, or a plain map if even that fails.
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Sqlite(SqliteStore),
    Memory(MemoryStore),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match local_storage() {
            Ok(storage) => {
                log::info!("[DWLR] storage: using localStorage");
                BrowserStorage::Local(storage)
            }
            Err(e) => {
                log::warn!("[DWLR] storage: {:#}, values will not survive a reload", e);
                match SqliteStore::open_in_memory() {
                    Ok(store) => BrowserStorage::Sqlite(store),
                    Err(e) => {
                        log::error!("[DWLR] storage: sqlite fallback failed: {:#}", e);
                        BrowserStorage::Memory(MemoryStore::new())
                    }
                }
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, BrowserStorage::Local(_))
    }
}

fn local_storage() -> anyhow::Result<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| anyhow!("localStorage is unavailable"))
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).map_err(js_error),
            BrowserStorage::Sqlite(store) => store.get(key),
            BrowserStorage::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value).map_err(js_error),
            BrowserStorage::Sqlite(store) => store.set(key, value),
            BrowserStorage::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        match self {
            BrowserStorage::Local(storage) => storage.remove_item(key).map_err(js_error),
            BrowserStorage::Sqlite(store) => store.remove(key),
            BrowserStorage::Memory(store) => store.remove(key),
        }
    }
}
