//! Low water level banner.

use dioxus::prelude::*;
use dwlr_core::alert::Severity;

#[derive(Props, Clone, PartialEq)]
pub struct AlertBannerProps {
    pub severity: Severity,
    pub description: String,
    /// Buttons rendered under the description
    #[props(default)]
    pub children: Element,
}

/// Red banner for critical alerts, amber for low ones.
#[component]
pub fn AlertBanner(props: AlertBannerProps) -> Element {
    let palette = match props.severity {
        Severity::Critical => "background: #FEF2F2; border: 1px solid #FCA5A5; color: #B91C1C;",
        Severity::Low => "background: #FFFBEB; border: 1px solid #FDE68A; color: #78350F;",
    };
    let style = format!("{palette} border-radius: 8px; padding: 16px; display: flex; gap: 12px;");

    rsx! {
        div {
            role: "alert",
            style: "{style}",
            span { style: "font-size: 18px;", "⚠" }
            div {
                style: "flex: 1;",
                h5 {
                    style: "margin: 0 0 4px 0; font-size: 15px; font-weight: 600;",
                    "{props.severity.banner_title()}"
                }
                p { style: "margin: 0; font-size: 14px;", "{props.description}" }
                div { style: "margin-top: 8px;", {props.children} }
            }
        }
    }
}
