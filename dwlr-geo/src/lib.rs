//! Place search and interactive map adapters.
//!
//! The mapping provider is reached only through two capability traits:
//! [`PlaceSearch`] for autocomplete and place details, and [`MapSurface`] for
//! drawing the map and its marker. The browser implements them over the
//! Google Maps JavaScript API; tests use in-memory fakes.

pub mod error;
pub mod loader;
pub mod map;
pub mod search;

pub use error::{GeoError, Result};
pub use loader::ScriptLoader;
pub use map::{LatLng, MapController, MapSurface, MapView, MarkerId};
pub use search::{LocationSearch, PlaceDetails, PlaceSearch, Prediction, PredictionRequest};
