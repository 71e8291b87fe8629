//! Static conservation guidance.

use super::use_tips;
use dioxus::prelude::*;
use dwlr_core::tips::{TipCategory, SHORTAGE_ADVISORY};
use dwlr_ui::components::{ChartHeader, TipList};

const SEASONAL: [(TipCategory, &str); 3] = [
    (TipCategory::Summer, "☀️"),
    (TipCategory::Monsoon, "🌧️"),
    (TipCategory::Winter, "❄️"),
];

const REGIONAL: [(TipCategory, &str); 2] = [(TipCategory::Urban, "🏙️"), (TipCategory::Rural, "🌾")];

fn owned(tips: Vec<&str>) -> Vec<String> {
    tips.into_iter().map(str::to_string).collect()
}

#[component]
pub fn PrecautionsPage() -> Element {
    let tips = use_tips();
    let general = owned(tips.for_category(TipCategory::General));

    rsx! {
        div {
            style: "display: grid; gap: 32px;",
            ChartHeader {
                title: "Water Conservation Tips".to_string(),
                subtitle: "Essential water conservation measures and safety precautions for different seasons and regions.".to_string(),
            }

            section {
                h2 { style: "margin: 0 0 16px; font-size: 22px; font-weight: 600;", "💧 {TipCategory::General.title()}" }
                div {
                    style: "display: grid; gap: 16px; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));",
                    for (index, tip) in general.iter().enumerate() {
                        div {
                            key: "{index}",
                            style: "display: flex; gap: 12px; align-items: flex-start; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; background: #fff;",
                            span {
                                style: "flex-shrink: 0; width: 24px; height: 24px; border-radius: 9999px; background: #dbeafe; color: #2563eb; display: flex; align-items: center; justify-content: center; font-size: 13px;",
                                "{index + 1}"
                            }
                            p { style: "margin: 0; font-size: 14px;", "{tip}" }
                        }
                    }
                }
            }

            section {
                h2 { style: "margin: 0 0 16px; font-size: 22px; font-weight: 600;", "Seasonal Water Conservation" }
                div {
                    style: "display: grid; gap: 16px; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));",
                    for (category, icon) in SEASONAL {
                        TipList {
                            key: "{category.title()}",
                            title: format!("{icon} {}", category.title()),
                            tips: owned(tips.for_category(category)),
                        }
                    }
                }
            }

            section {
                h2 { style: "margin: 0 0 16px; font-size: 22px; font-weight: 600;", "📍 Regional Water Conservation" }
                div {
                    style: "display: grid; gap: 16px; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));",
                    for (category, icon) in REGIONAL {
                        TipList {
                            key: "{category.title()}",
                            title: format!("{icon} {}", category.title()),
                            tips: owned(tips.for_category(category)),
                        }
                    }
                }
            }

            div {
                style: "display: flex; gap: 12px; border: 1px solid #fde68a; border-radius: 8px; padding: 16px; background: #fffbeb; color: #78350f;",
                span { style: "font-size: 18px;", "⚠" }
                div {
                    h3 { style: "margin: 0 0 4px; font-size: 15px; font-weight: 600;", "Water Conservation Alert" }
                    p { style: "margin: 0; font-size: 14px;", "{SHORTAGE_ADVISORY}" }
                }
            }
        }
    }
}
