//! Detailed forecast charts for the selected place.

use dioxus::prelude::*;
use dwlr_core::water_level::{ForecastDay, WaterLevelData};
use dwlr_ui::components::{ChartContainer, ChartHeader, SectionCard};
use dwlr_ui::js_bridge;
use dwlr_ui::route::Page;
use dwlr_ui::state::AppState;
use serde_json::{json, Value};

const LEVEL_CHART_ID: &str = "forecast-level-chart";
const DETAILED_CHART_ID: &str = "forecast-detailed-chart";
const TEMPERATURE_CHART_ID: &str = "forecast-temperature-chart";

const CARD_STYLE: &str = "border: 1px solid #e5e7eb; border-radius: 12px; padding: 20px; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,0.08);";

fn forecast_rows(forecast: &[ForecastDay]) -> String {
    let rows: Vec<Value> = forecast
        .iter()
        .map(|day| {
            json!({
                "name": day.day,
                "level": day.level,
                "precipitation": day.precipitation,
                "temperature": day.temperature,
            })
        })
        .collect();
    serde_json::to_string(&rows).unwrap_or_default()
}

fn series_config(height: u32, series: Value) -> String {
    serde_json::to_string(&json!({ "height": height, "series": series })).unwrap_or_default()
}

fn render_forecast_charts(forecast: &[ForecastDay]) {
    let rows = forecast_rows(forecast);
    js_bridge::init_charts();
    js_bridge::render_line_chart(
        LEVEL_CHART_ID,
        &rows,
        &series_config(
            256,
            json!([{ "key": "level", "label": "Water Level (m)", "color": "#3b82f6", "fill": "#93c5fd" }]),
        ),
    );
    js_bridge::render_line_chart(
        DETAILED_CHART_ID,
        &rows,
        &series_config(
            320,
            json!([
                { "key": "level", "label": "Water Level (m)", "color": "#3b82f6", "axis": "left" },
                { "key": "temperature", "label": "Temperature (°C)", "color": "#ef4444", "axis": "right" },
            ]),
        ),
    );
    js_bridge::render_line_chart(
        TEMPERATURE_CHART_ID,
        &rows,
        &series_config(
            256,
            json!([{ "key": "temperature", "label": "Temperature (°C)", "color": "#ef4444", "fill": "#fecaca" }]),
        ),
    );
}

#[component]
pub fn AnalysisPage() -> Element {
    let state = use_context::<AppState>();
    let place = (state.selected_location)();
    let data = (state.water_data)();

    // Nothing to analyse yet: send the user to pick a place.
    use_effect(move || {
        if state.selected_location.read().is_none() || state.water_data.read().is_none() {
            state.navigate(Page::Location);
        }
    });

    use_effect(move || {
        if let Some(data) = state.water_data.read().as_ref() {
            render_forecast_charts(&data.forecast);
        }
    });

    use_drop(|| {
        for id in [LEVEL_CHART_ID, DETAILED_CHART_ID, TEMPERATURE_CHART_ID] {
            js_bridge::destroy_chart(id);
        }
    });

    let (Some(place), Some(data)) = (place, data) else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "display: grid; gap: 24px;",
            div {
                button {
                    style: "padding: 6px 12px; margin-bottom: 12px; border-radius: 6px; border: 1px solid #d1d5db; background: #fff; cursor: pointer; font-size: 14px;",
                    onclick: move |_| state.navigate(Page::Location),
                    "← Back to Map"
                }
                ChartHeader {
                    title: "Water Level Analysis".to_string(),
                    subtitle: place.description.clone(),
                }
            }
            div {
                style: "display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));",
                CurrentLevelCard { data: data.clone() }
                div {
                    style: "{CARD_STYLE}",
                    h3 { style: "margin: 0 0 12px; font-size: 16px;", "5-Day Forecast" }
                    ChartContainer { id: LEVEL_CHART_ID.to_string(), min_height: 256 }
                    div {
                        style: "display: flex; justify-content: space-between; margin-top: 12px; font-size: 14px;",
                        if let Some(high) = data.highest_forecast_level() {
                            span { "Highest Level: " strong { "{high}m" } }
                        }
                        if let Some(low) = data.lowest_forecast_level() {
                            span { "Lowest Level: " strong { "{low}m" } }
                        }
                    }
                }
            }
            SectionCard {
                title: "Detailed Forecast".to_string(),
                ChartContainer { id: DETAILED_CHART_ID.to_string(), min_height: 320 }
            }
            div {
                style: "display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));",
                SectionCard {
                    title: "Precipitation Forecast".to_string(),
                    div {
                        style: "display: grid; gap: 12px;",
                        for day in data.forecast.iter() {
                            PrecipitationRow { key: "{day.day}", day: day.clone() }
                        }
                    }
                }
                SectionCard {
                    title: "Temperature Trends".to_string(),
                    ChartContainer { id: TEMPERATURE_CHART_ID.to_string(), min_height: 256 }
                }
            }
        }
    }
}

#[component]
fn CurrentLevelCard(data: WaterLevelData) -> Element {
    rsx! {
        div {
            style: "{CARD_STYLE}",
            h3 { style: "margin: 0 0 16px; font-size: 16px;", "Current Water Level" }
            div {
                style: "display: grid; gap: 16px; grid-template-columns: 1fr 1fr;",
                div {
                    p { style: "margin: 0; font-size: 12px; color: #6b7280;", "Current Level" }
                    p { style: "margin: 4px 0 0; font-size: 28px; font-weight: 700; color: #2563eb;", "{data.current_level}m" }
                }
                div {
                    p { style: "margin: 0; font-size: 12px; color: #6b7280;", "Average" }
                    p { style: "margin: 4px 0 0; font-size: 28px; font-weight: 700;", "{data.average_level}m" }
                }
            }
            div {
                style: "margin-top: 16px;",
                p { style: "margin: 0; font-size: 12px; color: #6b7280;", "Status" }
                p {
                    style: "margin: 4px 0 0; font-size: 16px; font-weight: 600; color: #d97706;",
                    "{data.trend.arrow()} {data.trend.status_label()}"
                }
                p { style: "margin: 2px 0 0; font-size: 13px; color: #6b7280;", "{data.trend.description()}" }
            }
            p {
                style: "margin: 16px 0 0; font-size: 12px; color: #9ca3af;",
                "Last Updated: {data.last_updated}"
            }
        }
    }
}

#[component]
fn PrecipitationRow(day: ForecastDay) -> Element {
    let width = format!("{:.0}%", day.precipitation_bar_percent());

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 80px 1fr 48px; gap: 12px; align-items: center; font-size: 14px;",
            span { "{day.day}" }
            div {
                style: "height: 10px; border-radius: 9999px; background: #e5e7eb; overflow: hidden;",
                div { style: "height: 100%; width: {width}; background: #3b82f6;" }
            }
            span { style: "text-align: right;", "{day.precipitation}%" }
        }
    }
}
