//! Google Maps in the browser: script loading, visibility and the
//! [`MapSurface`] implementation.

use crate::config;
use crate::js_bridge::{self, call_js, describe_js_error, js_arg};
use crate::timer;
use dwlr_geo::map::SCRIPT_TIMEOUT_MS;
use dwlr_geo::{GeoError, LatLng, MapSurface, MapView, MarkerId, Result, ScriptLoader};
use std::rc::Rc;

thread_local! {
    static SCRIPT_LOADER: Rc<ScriptLoader> = Rc::new(ScriptLoader::new());
}

/// Load the Maps JavaScript API once for the whole app.
///
/// Every page shares one loader: a second caller waits on the first load,
/// and a failed or timed-out load lets the next caller try again.
pub async fn load_maps_script() -> Result<()> {
    let key = config::google_maps_api_key().ok_or(GeoError::MissingApiKey)?;
    js_bridge::init_maps();
    let loader = SCRIPT_LOADER.with(Rc::clone);
    loader
        .load(
            move || async move {
                let code = format!("window.dwlrMaps.loadScript({})", js_arg(key));
                js_bridge::eval_promise(&code)
                    .await
                    .map(|_| ())
                    .map_err(|e| GeoError::LoadFailed(describe_js_error(&e)))
            },
            timer::sleep_ms(SCRIPT_TIMEOUT_MS),
        )
        .await
}

/// Resolve once the element with `container_id` scrolls into view.
pub async fn wait_until_visible(container_id: &str) {
    js_bridge::init_maps();
    let code = format!("window.dwlrMaps.whenVisible({})", js_arg(container_id));
    if let Err(e) = js_bridge::eval_promise(&code).await {
        log::warn!("[DWLR] maps: visibility check failed: {}", describe_js_error(&e));
    }
}

/// A Google map drawn into one DOM container.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleMapSurface {
    container_id: String,
}

impl GoogleMapSurface {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }
}

impl MapSurface for GoogleMapSurface {
    fn create_map(&mut self, view: MapView) -> Result<()> {
        let code = format!(
            "window.dwlrMaps.createMap({}, {}, {}, {})",
            js_arg(&self.container_id),
            view.center.lat,
            view.center.lng,
            view.zoom
        );
        js_bridge::eval_js(&code)
            .map(|_| ())
            .map_err(|e| GeoError::LoadFailed(describe_js_error(&e)))
    }

    fn add_marker(&mut self, position: LatLng, title: &str) -> Result<MarkerId> {
        let code = format!(
            "window.dwlrMaps.addMarker({}, {}, {})",
            position.lat,
            position.lng,
            js_arg(title)
        );
        let id = js_bridge::eval_js(&code).map_err(|e| {
            log::error!("[DWLR] maps: addMarker failed: {}", describe_js_error(&e));
            GeoError::MapNotReady
        })?;
        id.as_f64()
            .map(|id| MarkerId(id as u32))
            .ok_or_else(|| GeoError::InvalidResponse("marker id is not a number".to_string()))
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        call_js(&format!("window.dwlrMaps.removeMarker({})", marker.0));
    }

    fn set_view(&mut self, view: MapView) -> Result<()> {
        let code = format!(
            "window.dwlrMaps.setView({}, {}, {})",
            view.center.lat, view.center.lng, view.zoom
        );
        js_bridge::eval_js(&code).map(|_| ()).map_err(|e| {
            log::error!("[DWLR] maps: setView failed: {}", describe_js_error(&e));
            GeoError::MapNotReady
        })
    }

    fn clear_listeners(&mut self) {
        call_js(&format!(
            "window.dwlrMaps && window.dwlrMaps.clearListeners({})",
            js_arg(&self.container_id)
        ));
    }
}
