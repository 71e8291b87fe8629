//! Map-driven water level tracker with a five-day forecast.

use dioxus::prelude::*;
use dwlr_core::place::Place;
use dwlr_core::water_level::{Trend, WaterLevelData};
use dwlr_geo::MapController;
use dwlr_ui::components::{ChartHeader, ErrorDisplay, LoadingSpinner, LocationSearchBox, Notice};
use dwlr_ui::maps::{self, GoogleMapSurface};
use dwlr_ui::route::Page;
use dwlr_ui::state::AppState;
use std::cell::RefCell;
use std::rc::Rc;

const MAP_CONTAINER_ID: &str = "dwlr-location-map";

const CARD_STYLE: &str = "border: 1px solid #e5e7eb; border-radius: 12px; padding: 20px; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,0.08);";

type SharedMap = Rc<RefCell<MapController<GoogleMapSurface>>>;

#[component]
pub fn LocationPage() -> Element {
    let state = use_context::<AppState>();
    let mut map_notice = use_signal(|| Some("Loading map...".to_string()));
    let map: SharedMap =
        use_hook(|| Rc::new(RefCell::new(MapController::new(GoogleMapSurface::new(MAP_CONTAINER_ID)))));

    // Create the map once its container scrolls into view.
    let visible_map = map.clone();
    use_future(move || {
        let map = visible_map.clone();
        async move {
            maps::wait_until_visible(MAP_CONTAINER_ID).await;
            let shown = match maps::load_maps_script().await {
                Ok(()) => map.borrow_mut().on_visible(),
                Err(e) => Err(e),
            };
            match shown {
                Ok(()) => map_notice.set(None),
                Err(e) => {
                    log::error!("[DWLR] location: map unavailable: {}", e);
                    map_notice.set(Some(e.map_notice().to_string()));
                }
            }
        }
    });

    let marker_map = map.clone();
    use_effect(move || {
        let Some(place) = state.selected_location.read().clone() else {
            return;
        };
        if let Err(e) = marker_map.borrow_mut().render(&place) {
            log::warn!("[DWLR] location: could not show {}: {}", place.description, e);
        }
    });

    let dropped_map = map.clone();
    use_drop(move || dropped_map.borrow_mut().teardown());

    let handle_select = move |place: Place| {
        if place.coordinates().is_none() {
            log::warn!("[DWLR] location: {} has no coordinates, ignoring", place.description);
            return;
        }
        spawn(async move {
            state.fetch_water_data(place).await;
        });
    };

    let selected = (state.selected_location)();

    rsx! {
        div {
            style: "display: grid; gap: 24px;",
            ChartHeader {
                title: "Water Level Tracker".to_string(),
                subtitle: "Search any location to view water level data and forecasts".to_string(),
            }
            LocationSearchBox {
                value: selected.as_ref().map(|p| p.description.clone()).unwrap_or_default(),
                on_select: handle_select,
            }
            if let Some(notice) = map_notice() {
                Notice { message: notice }
            }
            div {
                style: "display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));",
                div {
                    style: "border-radius: 12px; overflow: hidden; border: 1px solid #e5e7eb; background: #e5e7eb;",
                    div {
                        id: MAP_CONTAINER_ID,
                        style: "width: 100%; height: 400px;",
                    }
                }
                match selected {
                    Some(place) => rsx! { WaterLevelCard { place } },
                    None => rsx! {
                        div {
                            style: "{CARD_STYLE} display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; min-height: 240px;",
                            span { style: "font-size: 32px; color: #9ca3af;", "📍" }
                            h3 { style: "margin: 12px 0 4px; font-size: 18px;", "No Location Selected" }
                            p {
                                style: "margin: 0; font-size: 14px; color: #6b7280;",
                                "Search and select a location to view water level data"
                            }
                        }
                    },
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct WaterLevelCardProps {
    place: Place,
}

/// Reading for the selected place: spinner, error with retry, or data.
#[component]
fn WaterLevelCard(props: WaterLevelCardProps) -> Element {
    let state = use_context::<AppState>();
    let loading = (state.loading)();
    let error = (state.error_msg)();
    let data = (state.water_data)();
    let retry_place = props.place.clone();

    rsx! {
        div {
            style: "{CARD_STYLE}",
            h3 { style: "margin: 0 0 4px; font-size: 18px;", "Water Level Data" }
            p { style: "margin: 0 0 16px; font-size: 14px; color: #6b7280;", "{props.place.description}" }
            if loading {
                LoadingSpinner {}
            } else if let Some(message) = error {
                ErrorDisplay {
                    message,
                    on_retry: move |_| {
                        let place = retry_place.clone();
                        spawn(async move {
                            state.fetch_water_data(place).await;
                        });
                    },
                }
            } else if let Some(data) = data {
                ReadingDetails { data }
                button {
                    style: "margin-top: 16px; width: 100%; padding: 10px; border-radius: 6px; border: none; background: #2563eb; color: #fff; font-weight: 500; cursor: pointer;",
                    onclick: move |_| state.navigate(Page::Analysis),
                    "View Detailed Analysis"
                }
            }
        }
    }
}

#[component]
fn ReadingDetails(data: WaterLevelData) -> Element {
    let trend_color = match data.trend {
        Trend::Up => "#16a34a",
        Trend::Down => "#dc2626",
        Trend::Stable => "#6b7280",
    };

    rsx! {
        div {
            style: "display: grid; gap: 12px; grid-template-columns: repeat(3, 1fr); margin-bottom: 16px;",
            Stat { label: "Current Level", value: format!("{}m", data.current_level) }
            Stat { label: "Avg", value: format!("{}m", data.average_level) }
            div {
                p { style: "margin: 0; font-size: 12px; color: #6b7280;", "Trend" }
                p {
                    style: "margin: 4px 0 0; font-size: 18px; font-weight: 600; color: {trend_color};",
                    "{data.trend.arrow()} {data.trend.as_str()}"
                }
            }
        }
        p { style: "margin: 0 0 16px; font-size: 12px; color: #9ca3af;", "Last updated: {data.last_updated}" }
        h4 { style: "margin: 0 0 8px; font-size: 14px;", "5-Day Forecast" }
        div {
            style: "display: grid; gap: 4px;",
            for day in data.forecast.iter() {
                div {
                    key: "{day.day}",
                    style: "display: grid; grid-template-columns: 1fr repeat(3, auto); gap: 16px; font-size: 14px; padding: 4px 0; border-bottom: 1px solid #f3f4f6;",
                    span { style: "font-weight: 500;", "{day.day}" }
                    span { "{day.level}m" }
                    span { style: "color: #2563eb;", "{day.precipitation}%" }
                    span { style: "color: #ef4444;", "{day.temperature}°C" }
                }
            }
        }
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            p { style: "margin: 0; font-size: 12px; color: #6b7280;", "{label}" }
            p { style: "margin: 4px 0 0; font-size: 18px; font-weight: 600;", "{value}" }
        }
    }
}
