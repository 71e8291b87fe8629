use crate::kv::KeyValueStore;
use dwlr_core::place::Place;
use dwlr_core::water_level::WaterLevelData;
use dwlr_data::WaterLevelSource;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

/// Storage key of the selected place.
pub const SELECTED_LOCATION_KEY: &str = "selectedLocation";
/// Storage key of the last water level reading.
pub const WATER_DATA_KEY: &str = "waterData";
/// Error shown when a fetch fails.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch water level data. Please try again.";
/// Simulated network delay the browser waits before generating data.
pub const SIMULATED_DELAY_MS: u32 = 2000;

/// Point-in-time copy of the store state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub selected_location: Option<Place>,
    pub water_data: Option<WaterLevelData>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Handle for one in-flight fetch. Only the most recent ticket may complete.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    generation: u64,
    place: Place,
}

impl FetchTicket {
    pub fn place(&self) -> &Place {
        &self.place
    }
}

type Listener = Rc<dyn Fn(&StoreSnapshot)>;

struct Inner<K> {
    storage: K,
    state: StoreSnapshot,
    generation: u64,
    listeners: Vec<Listener>,
}

/// Shared water level state, persisted through `K`.
///
/// Cloning is cheap and every clone sees the same state. Listeners registered
/// with [`subscribe`](Self::subscribe) receive a snapshot after every change.
pub struct WaterLevelStore<K: KeyValueStore> {
    inner: Rc<RefCell<Inner<K>>>,
}

impl<K: KeyValueStore> Clone for WaterLevelStore<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K: KeyValueStore> WaterLevelStore<K> {
    /// Build the store, restoring the place and reading saved in `storage`.
    ///
    /// Stored values that fail to parse are logged and treated as absent.
    pub fn new(storage: K) -> Self {
        let selected_location = restore::<Place, _>(&storage, SELECTED_LOCATION_KEY);
        let water_data = restore::<WaterLevelData, _>(&storage, WATER_DATA_KEY);
        log::info!(
            "[DWLR] store: restored location={} water_data={}",
            selected_location.is_some(),
            water_data.is_some()
        );
        Self {
            inner: Rc::new(RefCell::new(Inner {
                storage,
                state: StoreSnapshot {
                    selected_location,
                    water_data,
                    is_loading: false,
                    error: None,
                },
                generation: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.inner.borrow().state.clone()
    }

    pub fn selected_location(&self) -> Option<Place> {
        self.inner.borrow().state.selected_location.clone()
    }

    pub fn water_data(&self) -> Option<WaterLevelData> {
        self.inner.borrow().state.water_data.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.borrow().state.is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner.borrow().state.error.clone()
    }

    /// Register a change listener.
    pub fn subscribe(&self, listener: impl Fn(&StoreSnapshot) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }

    /// Replace the selected place; `None` also removes it from storage.
    ///
    /// A fetch still in flight is abandoned: its ticket goes stale and the
    /// loading flag is cleared.
    pub fn set_selected_location(&self, place: Option<Place>) -> anyhow::Result<()> {
        let result = self.update(|inner| {
            if inner.state.is_loading {
                log::debug!(
                    "[DWLR] store: selection change abandons fetch #{}",
                    inner.generation
                );
            }
            inner.generation += 1;
            inner.state.is_loading = false;
            inner.state.selected_location = place.clone();
            persist(&inner.storage, SELECTED_LOCATION_KEY, place.as_ref())
        });
        self.notify();
        result
    }

    /// Replace the water level reading; `None` also removes it from storage.
    pub fn set_water_data(&self, data: Option<WaterLevelData>) -> anyhow::Result<()> {
        let result = self.update(|inner| {
            inner.state.water_data = data.clone();
            persist(&inner.storage, WATER_DATA_KEY, data.as_ref())
        });
        self.notify();
        result
    }

    pub fn set_loading(&self, loading: bool) {
        self.update(|inner| inner.state.is_loading = loading);
        self.notify();
    }

    pub fn set_error(&self, error: Option<String>) {
        self.update(|inner| inner.state.error = error);
        self.notify();
    }

    /// Start a fetch for `place`: mark loading, clear the error, and select
    /// the place right away. The place is not persisted until the fetch
    /// completes.
    ///
    /// Any earlier ticket becomes stale.
    pub fn begin_fetch(&self, place: Place) -> FetchTicket {
        let ticket = self.update(|inner| {
            inner.generation += 1;
            inner.state.is_loading = true;
            inner.state.error = None;
            inner.state.selected_location = Some(place.clone());
            FetchTicket {
                generation: inner.generation,
                place,
            }
        });
        log::info!(
            "[DWLR] store: fetch #{} started for {}",
            ticket.generation,
            ticket.place.description
        );
        self.notify();
        ticket
    }

    /// Apply the outcome of a fetch. Returns `false`, leaving state and
    /// storage untouched, when a newer fetch or a new selection has happened
    /// since `ticket`.
    ///
    /// A reading that cannot be persisted is still kept in memory; the
    /// failure only sets the error message.
    pub fn complete_fetch(
        &self,
        ticket: FetchTicket,
        result: anyhow::Result<WaterLevelData>,
    ) -> bool {
        let applied = self.update(|inner| {
            if ticket.generation != inner.generation {
                log::debug!(
                    "[DWLR] store: dropping stale fetch #{} (current #{})",
                    ticket.generation,
                    inner.generation
                );
                return false;
            }
            let outcome = result.and_then(|data| {
                let saved = persist(&inner.storage, SELECTED_LOCATION_KEY, Some(&ticket.place))
                    .and_then(|()| persist(&inner.storage, WATER_DATA_KEY, Some(&data)));
                inner.state.water_data = Some(data);
                saved
            });
            if let Err(e) = outcome {
                log::error!("[DWLR] store: error fetching water data: {:#}", e);
                inner.state.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
            inner.state.is_loading = false;
            true
        });
        if applied {
            self.notify();
        }
        applied
    }

    /// Select `place`, wait for `delay`, then load a reading from `source`.
    ///
    /// Overlapping calls resolve as last-call-wins; the return value says
    /// whether this call's result was applied.
    pub async fn fetch_water_data<S, D>(&self, place: Place, source: &S, delay: D) -> bool
    where
        S: WaterLevelSource + ?Sized,
        D: Future<Output = ()>,
    {
        let ticket = self.begin_fetch(place);
        delay.await;
        let result = source.fetch(ticket.place());
        self.complete_fetch(ticket, result)
    }

    fn update<R>(&self, f: impl FnOnce(&mut Inner<K>) -> R) -> R {
        let mut inner = self.inner.borrow_mut();
        f(&mut inner)
    }

    fn notify(&self) {
        let (listeners, snapshot) = {
            let inner = self.inner.borrow();
            (inner.listeners.clone(), inner.state.clone())
        };
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

fn restore<T: DeserializeOwned, K: KeyValueStore>(storage: &K, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::error!("[DWLR] store: error reading {} from storage: {:#}", key, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("[DWLR] store: error parsing {} from storage: {}", key, e);
            None
        }
    }
}

fn persist<T: Serialize, K: KeyValueStore>(
    storage: &K,
    key: &str,
    value: Option<&T>,
) -> anyhow::Result<()> {
    match value {
        Some(value) => storage.set(key, &serde_json::to_string(value)?),
        None => storage.remove(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use dwlr_core::water_level::{ForecastDay, Trend};
    use dwlr_data::MockWaterLevelSource;
    use futures::channel::oneshot;
    use std::cell::Cell;

    fn pune() -> Place {
        Place {
            description: "Pune, Maharashtra, India".to_string(),
            place_id: Some("pune".to_string()),
            lat: Some(18.5204),
            lng: Some(73.8567),
            formatted_address: None,
            name: Some("Pune".to_string()),
        }
    }

    fn goa() -> Place {
        Place::from_description("Goa, India")
    }

    fn reading(level: i32) -> WaterLevelData {
        WaterLevelData {
            current_level: level,
            average_level: 1000,
            trend: Trend::Stable,
            last_updated: "19/10/2026, 10:00:00".to_string(),
            forecast: vec![ForecastDay {
                day: "Today".to_string(),
                level,
                precipitation: 3,
                temperature: 20,
            }],
        }
    }

    struct FailingSource;

    impl WaterLevelSource for FailingSource {
        fn fetch(&self, _place: &Place) -> anyhow::Result<WaterLevelData> {
            anyhow::bail!("sensor feed offline")
        }
    }

    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            self.0.get(key)
        }
        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("quota exceeded")
        }
        fn remove(&self, key: &str) -> anyhow::Result<()> {
            self.0.remove(key)
        }
    }

    #[tokio::test]
    async fn fetch_then_reload_restores_state() {
        let storage = MemoryStore::new();
        let store = WaterLevelStore::new(storage.clone());
        let source = MockWaterLevelSource::with_seed(1);

        assert!(store.fetch_water_data(pune(), &source, async {}).await);
        let before = store.snapshot();
        assert!(!before.is_loading);
        assert!(before.error.is_none());
        assert!(before.water_data.is_some());

        let reloaded = WaterLevelStore::new(storage);
        assert_eq!(reloaded.selected_location(), Some(pune()));
        assert_eq!(reloaded.water_data(), before.water_data);
        assert!(!reloaded.is_loading());
    }

    #[tokio::test]
    async fn failed_fetch_sets_message_and_clears_loading() {
        let storage = MemoryStore::new();
        let store = WaterLevelStore::new(storage.clone());

        assert!(store.fetch_water_data(goa(), &FailingSource, async {}).await);
        assert_eq!(store.error().as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert!(!store.is_loading());
        // the place is still selected, but nothing was persisted
        assert_eq!(store.selected_location(), Some(goa()));
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn persistence_failure_is_a_fetch_failure() {
        let store = WaterLevelStore::new(ReadOnlyStore(MemoryStore::new()));
        let source = MockWaterLevelSource::with_seed(2);
        assert!(store.fetch_water_data(goa(), &source, async {}).await);
        assert_eq!(store.error().as_deref(), Some(FETCH_ERROR_MESSAGE));
        // the reading survives in memory even though it was not saved
        assert!(store.water_data().is_some());
        assert_eq!(store.selected_location(), Some(goa()));
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn loading_is_visible_during_delay() {
        let store = WaterLevelStore::new(MemoryStore::new());
        let source = MockWaterLevelSource::with_seed(3);
        let (tx, rx) = oneshot::channel::<()>();

        let fetch = store.fetch_water_data(pune(), &source, async move {
            let _ = rx.await;
        });
        let observe = async {
            tokio::task::yield_now().await;
            let during = store.snapshot();
            let _ = tx.send(());
            during
        };
        let (applied, during) = futures::join!(fetch, observe);

        assert!(applied);
        assert!(during.is_loading);
        assert_eq!(during.selected_location, Some(pune()));
        assert!(during.water_data.is_none());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn last_fetch_wins() {
        let storage = MemoryStore::new();
        let store = WaterLevelStore::new(storage.clone());
        let source = MockWaterLevelSource::with_seed(4);
        let (tx, rx) = oneshot::channel::<()>();

        let slow = store.fetch_water_data(pune(), &source, async move {
            let _ = rx.await;
        });
        let fast = async {
            let applied = store.fetch_water_data(goa(), &source, async {}).await;
            let _ = tx.send(());
            applied
        };
        let (slow_applied, fast_applied) = futures::join!(slow, fast);

        assert!(!slow_applied);
        assert!(fast_applied);
        assert_eq!(store.selected_location(), Some(goa()));
        assert!(!store.is_loading());
        let stored: Place =
            serde_json::from_str(&storage.get(SELECTED_LOCATION_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, goa());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let store = WaterLevelStore::new(MemoryStore::new());
        let first = store.begin_fetch(pune());
        let second = store.begin_fetch(goa());

        assert!(!store.complete_fetch(first, Ok(reading(700))));
        assert!(store.is_loading());
        assert!(store.water_data().is_none());

        assert!(store.complete_fetch(second, Ok(reading(900))));
        assert_eq!(store.water_data().map(|d| d.current_level), Some(900));
    }

    #[test]
    fn selecting_during_a_fetch_abandons_it() {
        let storage = MemoryStore::new();
        let store = WaterLevelStore::new(storage.clone());
        let ticket = store.begin_fetch(pune());
        store.set_selected_location(Some(goa())).unwrap();
        assert!(!store.is_loading());

        assert!(!store.complete_fetch(ticket, Ok(reading(700))));
        assert_eq!(store.selected_location(), Some(goa()));
        assert!(store.water_data().is_none());
        assert!(storage.get(WATER_DATA_KEY).unwrap().is_none());

        let reloaded = WaterLevelStore::new(storage);
        assert_eq!(reloaded.selected_location(), Some(goa()));
        assert!(reloaded.water_data().is_none());
    }

    #[test]
    fn clearing_removes_persisted_keys() {
        let storage = MemoryStore::new();
        let store = WaterLevelStore::new(storage.clone());
        store.set_selected_location(Some(pune())).unwrap();
        store.set_water_data(Some(reading(800))).unwrap();
        assert_eq!(storage.len(), 2);

        store.set_selected_location(None).unwrap();
        store.set_water_data(None).unwrap();
        assert!(storage.is_empty());
        assert!(store.selected_location().is_none());
    }

    #[test]
    fn corrupt_storage_is_treated_as_absent() {
        let storage = MemoryStore::new();
        storage.set(SELECTED_LOCATION_KEY, "{not json").unwrap();
        storage
            .set(WATER_DATA_KEY, &serde_json::to_string(&reading(640)).unwrap())
            .unwrap();

        let store = WaterLevelStore::new(storage);
        assert!(store.selected_location().is_none());
        assert_eq!(store.water_data().map(|d| d.current_level), Some(640));
    }

    #[test]
    fn listeners_run_on_change() {
        let store = WaterLevelStore::new(MemoryStore::new());
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| counter.set(counter.get() + 1));

        store.set_loading(true);
        store.set_error(Some("boom".to_string()));
        let ticket = store.begin_fetch(goa());
        store.complete_fetch(ticket, Ok(reading(1000)));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn listeners_see_the_new_state() {
        let store = WaterLevelStore::new(MemoryStore::new());
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot| *sink.borrow_mut() = snapshot.selected_location.clone());

        store.set_selected_location(Some(goa())).unwrap();
        assert_eq!(*seen.borrow(), Some(goa()));
    }

    #[test]
    fn listeners_may_call_back_into_the_store() {
        let store = WaterLevelStore::new(MemoryStore::new());
        let reader = store.clone();
        let loading = Rc::new(Cell::new(false));
        let sink = Rc::clone(&loading);
        store.subscribe(move |_| sink.set(reader.is_loading()));

        store.set_loading(true);
        assert!(loading.get());
    }
}
