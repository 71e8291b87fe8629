//! Seasonal water insights for the selected place.

use super::{pick_precaution, use_tips};
use chrono::Datelike;
use dioxus::prelude::*;
use dwlr_core::alert::{active_alert, Severity, ALERT_THRESHOLD, CRITICAL_THRESHOLD};
use dwlr_core::place::location_name;
use dwlr_core::seasonal::{Season, SeriesKind};
use dwlr_core::tips::TipCategory;
use dwlr_data::alerts::today_label;
use dwlr_data::{SeasonalDataset, YAxis};
use dwlr_ui::components::{
    AlertBanner, ChartContainer, LocationSearchBox, ReferenceLine, SectionCard, TipList,
    YearRangeSelector,
};
use dwlr_ui::js_bridge;
use dwlr_ui::state::AppState;

const DEFAULT_TITLE: &str = "DWLR – Seasonal Water Insights";

const ALERT_LINE_COLOR: &str = "#f59e0b";
const CRITICAL_LINE_COLOR: &str = "#dc2626";

fn chart_id(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::Annual => "annual-water-level-chart",
        SeriesKind::Seasonal(Season::Summer) => "summer-water-level-chart",
        SeriesKind::Seasonal(Season::Monsoon) => "monsoon-water-level-chart",
        SeriesKind::Seasonal(Season::Winter) => "winter-water-level-chart",
    }
}

fn chart_color(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::Annual => "#2563eb",
        SeriesKind::Seasonal(Season::Summer) => "#3b82f6",
        SeriesKind::Seasonal(Season::Monsoon) => "#10b981",
        SeriesKind::Seasonal(Season::Winter) => "#6366f1",
    }
}

fn threshold_legend() -> Vec<ReferenceLine> {
    vec![
        ReferenceLine::new(format!("Alert ({ALERT_THRESHOLD}m)"), ALERT_LINE_COLOR),
        ReferenceLine::new(format!("Critical ({CRITICAL_THRESHOLD}m)"), CRITICAL_LINE_COLOR),
    ]
}

fn chart_config(kind: SeriesKind, axis: &YAxis) -> String {
    let (height, thresholds) = match kind {
        SeriesKind::Annual => (320, serde_json::json!([])),
        // Seasonal alerts are raised against these levels.
        SeriesKind::Seasonal(_) => (
            224,
            serde_json::json!([
                { "value": ALERT_THRESHOLD, "color": ALERT_LINE_COLOR },
                { "value": CRITICAL_THRESHOLD, "color": CRITICAL_LINE_COLOR },
            ]),
        ),
    };
    serde_json::to_string(&serde_json::json!({
        "color": chart_color(kind),
        "yTop": axis.top,
        "yTicks": axis.ticks,
        "unit": "m",
        "height": height,
        "thresholds": thresholds,
    }))
    .unwrap_or_default()
}

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<AppState>();
    let tips = use_tips();
    let mut show_precautions = use_signal(|| false);

    let dataset = use_memo(move || {
        let current_year = chrono::Local::now().year();
        SeasonalDataset::generate(state.seed(), current_year)
    });

    let alerts = use_memo(move || {
        let location = location_name(state.selected_location.read().as_ref());
        dataset.read().current_alerts(&today_label(), &location)
    });

    // New precaution whenever the featured alert changes.
    let banner_tips = tips.clone();
    let precaution = use_memo(move || {
        let _ = alerts.read();
        pick_precaution(&banner_tips)
    });

    use_effect(move || {
        let title = match state.selected_location.read().as_ref() {
            Some(place) => format!("{} – DWLR", place.description),
            None => DEFAULT_TITLE.to_string(),
        };
        js_bridge::set_document_title(&title);
    });

    // Re-render charts whenever the place or the year range changes
    use_effect(move || {
        let data = dataset.read();
        let range = (state.year_range)();
        let axis = data.y_axis();

        js_bridge::init_charts();
        for kind in SeriesKind::ALL {
            let points = data.filtered(kind, range);
            if points.is_empty() {
                js_bridge::destroy_chart(chart_id(kind));
                continue;
            }
            let data_json = serde_json::to_string(&points).unwrap_or_default();
            js_bridge::render_bar_chart(chart_id(kind), &data_json, &chart_config(kind, &axis));
        }
    });

    let selected = (state.selected_location)();
    let data = dataset.read();
    let range_label = data.range_label((state.year_range)());
    let first_year = data.first_year();
    let current_year = data.current_year();
    let featured = active_alert(&alerts.read()).cloned();
    let alert_tips: Vec<String> = tips
        .for_category(TipCategory::Alert)
        .into_iter()
        .map(str::to_string)
        .collect();

    rsx! {
        div {
            style: "display: grid; gap: 32px;",
            section {
                style: "display: grid; gap: 16px;",
                LocationSearchBox {
                    value: selected.as_ref().map(|p| p.description.clone()).unwrap_or_default(),
                    on_select: move |place| state.select_location(Some(place)),
                }
                if let Some(place) = selected.as_ref() {
                    div {
                        style: "border: 1px solid #e5e7eb; border-radius: 12px; background: #f1f5f9; padding: 8px 16px; font-size: 14px; color: #374151;",
                        "Showing insights for: "
                        strong { "{place.description}" }
                    }
                }
            }
            section {
                style: "display: grid; gap: 24px;",
                YearRangeSelector { first_year }

                if let Some(alert) = featured {
                    div {
                        style: "display: grid; gap: 16px;",
                        AlertBanner {
                            severity: alert.severity,
                            description: alert.seasonal_description(current_year, &precaution()),
                            button {
                                style: if alert.severity == Severity::Critical {
                                    "padding: 6px 12px; border-radius: 6px; border: none; background: #dc2626; color: #fff; cursor: pointer; font-size: 13px;"
                                } else {
                                    "padding: 6px 12px; border-radius: 6px; border: 1px solid #d1d5db; background: #fff; cursor: pointer; font-size: 13px;"
                                },
                                onclick: move |_| show_precautions.toggle(),
                                if show_precautions() { "Hide Precautions" } else { "Show Precautions" }
                            }
                        }
                        if show_precautions() {
                            TipList {
                                title: format!("💧 {}:", TipCategory::Alert.title()),
                                tips: alert_tips.clone(),
                            }
                        }
                    }
                }

                SectionCard {
                    title: format!("Annual Water Level ({range_label})"),
                    ChartContainer { id: chart_id(SeriesKind::Annual).to_string(), min_height: 320 }
                }

                div {
                    style: "display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));",
                    for season in Season::ALL {
                        SectionCard {
                            key: "{season.name()}",
                            title: format!("{} ({})", season.name(), season.months()),
                            ChartContainer {
                                id: chart_id(SeriesKind::Seasonal(season)).to_string(),
                                legend: threshold_legend(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_seasonal_charts_carry_alert_thresholds() {
        let axis = YAxis::for_max(4800);
        let annual: serde_json::Value =
            serde_json::from_str(&chart_config(SeriesKind::Annual, &axis)).unwrap();
        let winter: serde_json::Value =
            serde_json::from_str(&chart_config(SeriesKind::Seasonal(Season::Winter), &axis)).unwrap();

        assert_eq!(annual["thresholds"].as_array().map(Vec::len), Some(0));
        assert_eq!(winter["thresholds"][0]["value"], ALERT_THRESHOLD);
        assert_eq!(winter["thresholds"][1]["value"], CRITICAL_THRESHOLD);
        assert_eq!(winter["yTop"], 5000);
    }
}
