//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The selected place, water reading, loading flag and error mirror a
//! [`WaterLevelStore`] persisted in browser storage. Components read the
//! signals; every change goes through the store, which pushes a snapshot
//! back into the signals.

use crate::route::Page;
use crate::storage::BrowserStorage;
use crate::timer;
use dioxus::prelude::*;
use dwlr_core::place::{self, Place};
use dwlr_core::water_level::WaterLevelData;
use dwlr_data::{MockWaterLevelSource, WaterLevelSource, YearRange};
use dwlr_store::{StoreSnapshot, WaterLevelStore, SIMULATED_DELAY_MS};
use std::rc::Rc;

/// Shared application state for all DWLR pages.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Persisted store behind the mirrored signals
    store: Signal<WaterLevelStore<BrowserStorage>>,
    /// Where water readings come from
    source: Signal<Rc<dyn WaterLevelSource>>,
    /// Currently selected place
    pub selected_location: Signal<Option<Place>>,
    /// Last water level reading
    pub water_data: Signal<Option<WaterLevelData>>,
    /// Whether a fetch is in flight
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Page being shown
    pub page: Signal<Page>,
    /// Years shown by the seasonal charts
    pub year_range: Signal<YearRange>,
}

impl AppState {
    /// Create the state, restoring the last selection from browser storage.
    pub fn new() -> Self {
        Self::with_source(Rc::new(MockWaterLevelSource::from_entropy()))
    }

    pub fn with_source(source: Rc<dyn WaterLevelSource>) -> Self {
        let storage = BrowserStorage::open();
        if !storage.is_persistent() {
            log::warn!("[DWLR] state: selections are kept for this session only");
        }
        let store = WaterLevelStore::new(storage);
        let snapshot = store.snapshot();

        let state = Self {
            store: Signal::new(store.clone()),
            source: Signal::new(source),
            selected_location: Signal::new(snapshot.selected_location),
            water_data: Signal::new(snapshot.water_data),
            loading: Signal::new(snapshot.is_loading),
            error_msg: Signal::new(snapshot.error),
            page: Signal::new(Page::current()),
            year_range: Signal::new(YearRange::full()),
        };
        store.subscribe(move |snapshot| state.mirror(snapshot));
        state
    }

    fn mirror(&self, snapshot: &StoreSnapshot) {
        set_if_changed(self.selected_location, snapshot.selected_location.clone());
        set_if_changed(self.water_data, snapshot.water_data.clone());
        set_if_changed(self.loading, snapshot.is_loading);
        set_if_changed(self.error_msg, snapshot.error.clone());
    }

    fn store(&self) -> WaterLevelStore<BrowserStorage> {
        self.store.peek().clone()
    }

    /// Seed for the seasonal charts of the current selection.
    pub fn seed(&self) -> i64 {
        place::seed_for(self.selected_location.read().as_ref())
    }

    /// Select `place` without fetching a reading.
    pub fn select_location(&self, place: Option<Place>) {
        if let Err(e) = self.store().set_selected_location(place) {
            log::error!("[DWLR] state: could not save location: {:#}", e);
        }
    }

    pub fn set_error(&self, error: Option<String>) {
        self.store().set_error(error);
    }

    /// Select `place` and load its reading after the simulated delay.
    ///
    /// Returns whether this fetch's result was applied; a newer fetch
    /// started meanwhile wins.
    pub async fn fetch_water_data(self, place: Place) -> bool {
        let store = self.store();
        let source = self.source.peek().clone();
        store
            .fetch_water_data(place, source.as_ref(), timer::sleep_ms(SIMULATED_DELAY_MS))
            .await
    }

    /// Switch pages and record the page in the URL fragment.
    pub fn navigate(&self, page: Page) {
        let mut current = self.page;
        if *current.peek() != page {
            log::info!("[DWLR] state: navigate to {}", page.path());
            page.push();
            current.set(page);
        }
    }
}

fn set_if_changed<T: PartialEq + 'static>(mut signal: Signal<T>, value: T) {
    if *signal.peek() != value {
        signal.set(value);
    }
}
