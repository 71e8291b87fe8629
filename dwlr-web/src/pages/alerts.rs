//! Seasonal low water alerts for the selected place.

use super::{pick_precaution, use_tips};
use dioxus::prelude::*;
use dwlr_core::alert::{AlertData, Severity};
use dwlr_core::place::location_name;
use dwlr_core::tips::TipCategory;
use dwlr_data::alerts::{roll_season_alerts, today_label};
use dwlr_ui::components::{AlertBanner, ChartHeader, TipList};
use dwlr_ui::state::AppState;

#[component]
pub fn AlertsPage() -> Element {
    let state = use_context::<AppState>();
    let tips = use_tips();
    let mut selected = use_signal(|| 0usize);
    let mut show_precautions = use_signal(|| false);
    let location = location_name(state.selected_location.read().as_ref());

    // Fresh readings every time the page is opened.
    let roll_location = location.clone();
    let alerts = use_hook(move || roll_season_alerts(&mut rand::thread_rng(), &today_label(), &roll_location));
    let precaution_tips = tips.clone();
    let precaution = use_memo(move || {
        let _ = selected();
        pick_precaution(&precaution_tips)
    });

    let featured = alerts.get(selected()).or_else(|| alerts.first()).cloned();
    let alert_tips: Vec<String> = tips
        .for_category(TipCategory::Alert)
        .into_iter()
        .map(str::to_string)
        .collect();

    rsx! {
        div {
            style: "display: grid; gap: 24px;",
            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-end; justify-content: space-between;",
                ChartHeader {
                    title: "Water Level Alerts".to_string(),
                    subtitle: "Real-time monitoring of water levels and seasonal alerts".to_string(),
                }
                span {
                    style: "padding: 4px 12px; border-radius: 9999px; background: #eff6ff; color: #1d4ed8; font-size: 13px;",
                    "📍 {location}"
                }
            }

            if let Some(alert) = featured {
                div {
                    style: "display: grid; gap: 16px;",
                    AlertBanner {
                        severity: alert.severity,
                        description: alert.banner_description(&precaution()),
                        button {
                            style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #d1d5db; background: #fff; cursor: pointer; font-size: 13px;",
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

            section {
                h2 { style: "margin: 0 0 12px; font-size: 20px; font-weight: 600;", "Active Alerts" }
                if alerts.is_empty() {
                    p {
                        style: "padding: 16px; border-radius: 8px; background: #f0fdf4; color: #166534; font-size: 14px;",
                        "No active alerts. Water levels are normal for all seasons."
                    }
                } else {
                    div {
                        style: "display: grid; gap: 16px; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));",
                        for (index, alert) in alerts.iter().cloned().enumerate() {
                            AlertCard {
                                key: "{alert.season}",
                                alert,
                                active: index == selected(),
                                on_select: move |_| selected.set(index),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AlertCard(alert: AlertData, active: bool, on_select: EventHandler<()>) -> Element {
    let (accent, badge_style) = match alert.severity {
        Severity::Critical => ("#dc2626", "background: #fee2e2; color: #b91c1c;"),
        Severity::Low => ("#f59e0b", "background: #fef3c7; color: #92400e;"),
    };
    let border = if active { accent } else { "#e5e7eb" };
    let fill = format!("{:.0}%", alert.fill_percent());

    rsx! {
        div {
            style: "border: 2px solid {border}; border-radius: 12px; padding: 16px; background: #fff; cursor: pointer;",
            onclick: move |_| on_select.call(()),
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 8px;",
                div {
                    h3 { style: "margin: 0; font-size: 16px;", "{alert.season} Water Level" }
                    p { style: "margin: 4px 0 0; font-size: 12px; color: #6b7280;", "{alert.location} • {alert.date}" }
                }
                span {
                    style: "padding: 2px 8px; border-radius: 9999px; font-size: 12px; font-weight: 600; {badge_style}",
                    "{alert.severity.badge()}"
                }
            }
            p {
                style: "margin: 12px 0 8px; font-size: 14px;",
                strong { "{alert.value}m" }
                " (Threshold: {alert.severity.threshold()}m)"
            }
            div {
                style: "height: 8px; border-radius: 9999px; background: #e5e7eb; overflow: hidden;",
                div { style: "height: 100%; width: {fill}; background: {accent};" }
            }
        }
    }
}
