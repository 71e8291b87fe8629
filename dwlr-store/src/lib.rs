//! Application state for the DWLR pages, persisted through a key-value port.
//!
//! [`WaterLevelStore`] holds the selected place, the last water level reading,
//! and the loading/error flags. It writes through a [`KeyValueStore`] so the
//! browser can mirror into local storage while tests use [`MemoryStore`].
//! [`SqliteStore`] keeps the same contract on an in-memory SQLite table.

mod kv;
pub mod schema;
mod sqlite;
mod store;

pub use kv::{KeyValueStore, MemoryStore};
pub use sqlite::SqliteStore;
pub use store::{
    FetchTicket, StoreSnapshot, WaterLevelStore, FETCH_ERROR_MESSAGE, SELECTED_LOCATION_KEY,
    SIMULATED_DELAY_MS, WATER_DATA_KEY,
};
