//! Mount point for a D3 chart, with an optional legend of reference lines.

use dioxus::prelude::*;

/// A dashed reference line drawn across a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub label: String,
    pub color: &'static str,
}

impl ReferenceLine {
    pub fn new(label: impl Into<String>, color: &'static str) -> Self {
        Self { label: label.into(), color }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the chart script renders into
    pub id: String,
    #[props(default = 224)]
    pub min_height: u32,
    /// Reference lines explained under the chart
    #[props(default)]
    pub legend: Vec<ReferenceLine>,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let height = props.min_height;

    rsx! {
        div {
            style: "width: 100%;",
            div {
                id: "{props.id}",
                style: "width: 100%; min-height: {height}px;",
            }
            if !props.legend.is_empty() {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; margin-top: 6px; font-size: 11px; color: #6b7280;",
                    for line in props.legend.iter() {
                        span {
                            key: "{line.label}",
                            style: "display: inline-flex; align-items: center; gap: 4px;",
                            span { style: "display: inline-block; width: 14px; border-top: 2px dashed {line.color};" }
                            "{line.label}"
                        }
                    }
                }
            }
        }
    }
}
