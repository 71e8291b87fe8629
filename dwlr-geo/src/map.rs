//! Interactive map kept in sync with the selected place.

use crate::error::Result;
use dwlr_core::place::Place;

/// Geographic center of India.
pub const INDIA_CENTER: LatLng = LatLng { lat: 20.5937, lng: 78.9629 };
/// Zoom showing the whole country.
pub const COUNTRY_ZOOM: u8 = 5;
/// Zoom used when a place is selected.
pub const PLACE_ZOOM: u8 = 12;
/// How long the maps script may take to load.
pub const SCRIPT_TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl MapView {
    pub fn country() -> Self {
        Self { center: INDIA_CENTER, zoom: COUNTRY_ZOOM }
    }

    /// View centered on `place`, or `None` without coordinates.
    pub fn for_place(place: &Place) -> Option<Self> {
        place.coordinates().map(|(lat, lng)| Self {
            center: LatLng { lat, lng },
            zoom: PLACE_ZOOM,
        })
    }
}

/// Handle of a marker drawn on a [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u32);

/// Drawing capability of a mapping provider.
pub trait MapSurface {
    /// Create the map in its container.
    fn create_map(&mut self, view: MapView) -> Result<()>;
    fn add_marker(&mut self, position: LatLng, title: &str) -> Result<MarkerId>;
    fn remove_marker(&mut self, marker: MarkerId);
    fn set_view(&mut self, view: MapView) -> Result<()>;
    /// Drop every listener attached to the map and empty its container.
    fn clear_listeners(&mut self);
}

/// Lazily created map with at most one marker.
///
/// Nothing is drawn until [`on_visible`](Self::on_visible) reports the
/// container on screen; places rendered before that are remembered and
/// shown when the map comes up.
pub struct MapController<S: MapSurface> {
    surface: S,
    initialized: bool,
    marker: Option<MarkerId>,
    pending: Option<Place>,
}

impl<S: MapSurface> MapController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            initialized: false,
            marker: None,
            pending: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn marker(&self) -> Option<MarkerId> {
        self.marker
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The container became visible: create the map once.
    pub fn on_visible(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }
        let view = self
            .pending
            .as_ref()
            .and_then(MapView::for_place)
            .unwrap_or_else(MapView::country);
        self.surface.create_map(view)?;
        self.initialized = true;
        let place = self.pending.take();
        log::info!("[DWLR] map: created at zoom {}", view.zoom);
        if let Some(place) = place {
            self.place_marker(&place)?;
        }
        Ok(())
    }

    /// Center on `place` with a single marker. Places without coordinates
    /// are ignored.
    pub fn render(&mut self, place: &Place) -> Result<()> {
        if place.coordinates().is_none() {
            log::debug!("[DWLR] map: {} has no coordinates", place.description);
            return Ok(());
        }
        if !self.initialized {
            self.pending = Some(place.clone());
            return Ok(());
        }
        self.place_marker(place)
    }

    /// Remove the marker and listeners; a later `on_visible` starts over.
    pub fn teardown(&mut self) {
        if let Some(marker) = self.marker.take() {
            self.surface.remove_marker(marker);
        }
        if self.initialized {
            self.surface.clear_listeners();
            self.initialized = false;
        }
        self.pending = None;
    }

    fn place_marker(&mut self, place: &Place) -> Result<()> {
        let Some(view) = MapView::for_place(place) else {
            return Ok(());
        };
        if let Some(old) = self.marker.take() {
            self.surface.remove_marker(old);
        }
        self.marker = Some(self.surface.add_marker(view.center, &place.description)?);
        self.surface.set_view(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeSurface {
        maps_created: usize,
        views: Vec<MapView>,
        markers: HashMap<MarkerId, String>,
        next_id: u32,
        listeners_cleared: usize,
        fail_create: bool,
    }

    impl MapSurface for FakeSurface {
        fn create_map(&mut self, view: MapView) -> Result<()> {
            if self.fail_create {
                return Err(GeoError::LoadTimeout);
            }
            self.maps_created += 1;
            self.views.push(view);
            Ok(())
        }

        fn add_marker(&mut self, _position: LatLng, title: &str) -> Result<MarkerId> {
            self.next_id += 1;
            let id = MarkerId(self.next_id);
            self.markers.insert(id, title.to_string());
            Ok(id)
        }

        fn remove_marker(&mut self, marker: MarkerId) {
            self.markers.remove(&marker);
        }

        fn set_view(&mut self, view: MapView) -> Result<()> {
            self.views.push(view);
            Ok(())
        }

        fn clear_listeners(&mut self) {
            self.listeners_cleared += 1;
        }
    }

    fn place(name: &str, lat: f64, lng: f64) -> Place {
        Place {
            lat: Some(lat),
            lng: Some(lng),
            ..Place::from_description(name)
        }
    }

    #[test]
    fn map_waits_for_visibility() {
        let mut map = MapController::new(FakeSurface::default());
        map.render(&place("Pune", 18.52, 73.85)).unwrap();
        assert_eq!(map.surface().maps_created, 0);
        assert!(map.surface().markers.is_empty());

        map.on_visible().unwrap();
        assert_eq!(map.surface().maps_created, 1);
        assert_eq!(map.surface().views[0].zoom, PLACE_ZOOM);
        assert_eq!(map.surface().markers.len(), 1);

        // visibility again is a no-op
        map.on_visible().unwrap();
        assert_eq!(map.surface().maps_created, 1);
    }

    #[test]
    fn default_view_is_india() {
        let mut map = MapController::new(FakeSurface::default());
        map.on_visible().unwrap();
        assert_eq!(map.surface().views[0], MapView::country());
        assert_eq!(map.surface().views[0].center, INDIA_CENTER);
        assert!(map.marker().is_none());
    }

    #[test]
    fn two_selections_leave_one_marker() {
        let mut map = MapController::new(FakeSurface::default());
        map.on_visible().unwrap();
        map.render(&place("Pune", 18.52, 73.85)).unwrap();
        map.render(&place("Goa", 15.29, 74.12)).unwrap();

        let markers = &map.surface().markers;
        assert_eq!(markers.len(), 1);
        assert_eq!(markers.values().next().map(String::as_str), Some("Goa"));
        let last = map.surface().views.last().unwrap();
        assert_eq!(last.center, LatLng { lat: 15.29, lng: 74.12 });
        assert_eq!(last.zoom, PLACE_ZOOM);
    }

    #[test]
    fn places_without_coordinates_are_ignored() {
        let mut map = MapController::new(FakeSurface::default());
        map.on_visible().unwrap();
        map.render(&Place::from_description("Nowhere")).unwrap();
        assert!(map.surface().markers.is_empty());
        assert_eq!(map.surface().views.len(), 1);
    }

    #[test]
    fn teardown_releases_everything() {
        let mut map = MapController::new(FakeSurface::default());
        map.on_visible().unwrap();
        map.render(&place("Pune", 18.52, 73.85)).unwrap();
        map.teardown();

        assert!(map.surface().markers.is_empty());
        assert_eq!(map.surface().listeners_cleared, 1);
        assert!(!map.is_initialized());

        // reinitialization starts from scratch
        map.on_visible().unwrap();
        assert_eq!(map.surface().maps_created, 2);
        assert!(map.marker().is_none());
    }

    #[test]
    fn failed_creation_stays_uninitialized() {
        let surface = FakeSurface {
            fail_create: true,
            ..FakeSurface::default()
        };
        let mut map = MapController::new(surface);
        assert_eq!(map.on_visible(), Err(GeoError::LoadTimeout));
        assert!(!map.is_initialized());
    }
}
