//! Pair of sliders choosing the years shown by the seasonal charts.

use crate::state::AppState;
use dioxus::prelude::*;
use dwlr_data::WINDOW_YEARS;

#[derive(Props, Clone, PartialEq)]
pub struct YearRangeSelectorProps {
    /// Calendar year of index 0
    pub first_year: i32,
}

/// Start/end sliders over the 20-year window, kept at least one year apart.
#[component]
pub fn YearRangeSelector(props: YearRangeSelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let range = (state.year_range)();
    let first_year = props.first_year;
    let last_year = first_year + WINDOW_YEARS as i32 - 1;
    let start_year = first_year + range.start() as i32;
    let end_year = first_year + range.end() as i32;
    let max_index = WINDOW_YEARS - 1;

    let on_start = move |evt: Event<FormData>| {
        if let Ok(start) = evt.value().parse::<usize>() {
            let current = *state.year_range.peek();
            state.year_range.set(current.with_start(start));
        }
    };
    let on_end = move |evt: Event<FormData>| {
        if let Ok(end) = evt.value().parse::<usize>() {
            let current = *state.year_range.peek();
            state.year_range.set(current.with_end(end));
        }
    };

    rsx! {
        div {
            style: "border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; background: #fff;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h3 { style: "margin: 0; font-size: 14px; font-weight: 500;", "Year Range: {start_year} - {end_year}" }
                span { style: "font-size: 14px; color: #6b7280;", "{range.year_count()} years selected" }
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                label {
                    style: "flex: 1; font-size: 12px; color: #6b7280;",
                    "From"
                    input {
                        r#type: "range",
                        style: "width: 100%;",
                        min: "0",
                        max: "{max_index}",
                        step: "1",
                        value: "{range.start()}",
                        oninput: on_start,
                    }
                }
                label {
                    style: "flex: 1; font-size: 12px; color: #6b7280;",
                    "To"
                    input {
                        r#type: "range",
                        style: "width: 100%;",
                        min: "0",
                        max: "{max_index}",
                        step: "1",
                        value: "{range.end()}",
                        oninput: on_end,
                    }
                }
            }
            div {
                style: "display: flex; justify-content: space-between; margin-top: 8px; font-size: 12px; color: #6b7280;",
                span { "{first_year}" }
                span { "{last_year}" }
            }
        }
    }
}
