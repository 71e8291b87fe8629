use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = js_sys::Date::new_0().get_full_year();

    rsx! {
        footer {
            style: "margin-top: 64px; border-top: 1px solid #e5e7eb;",
            div {
                style: "max-width: 1280px; margin: 0 auto; padding: 32px 16px; display: flex; flex-wrap: wrap; gap: 16px; justify-content: space-between; font-size: 14px; color: #6b7280;",
                p { style: "margin: 0;", "© {year} DWLR. All rights reserved." }
                p { style: "margin: 0; opacity: 0.8;", "Made for monitoring seasonal water insights." }
            }
        }
    }
}
