//! Top navigation bar.

use crate::route::Page;
use crate::state::AppState;
use dioxus::prelude::*;

const NAV_CSS: &str = "@media (max-width: 640px) { .dwlr-nav-wide { display: none !important; } } \
@media (min-width: 641px) { .dwlr-nav-toggle { display: none !important; } }";

/// Brand plus links to every page; collapses behind a toggle on narrow screens.
#[component]
pub fn Navbar() -> Element {
    let state = use_context::<AppState>();
    let mut open = use_signal(|| false);
    let current = (state.page)();

    let links = move || rsx! {
        for page in Page::NAV {
            button {
                key: "{page.path()}",
                style: if page == current {
                    "background: none; border: none; cursor: pointer; padding: 4px 8px; font-size: 14px; font-weight: 500; color: #2563eb;"
                } else {
                    "background: none; border: none; cursor: pointer; padding: 4px 8px; font-size: 14px; font-weight: 500; color: #4b5563;"
                },
                onclick: move |_| {
                    open.set(false);
                    state.navigate(page);
                },
                "{page.label()}"
            }
        }
    };

    rsx! {
        style { {NAV_CSS} }
        header {
            style: "position: sticky; top: 0; z-index: 40; width: 100%; border-bottom: 1px solid #e5e7eb; background: rgba(255,255,255,0.85); backdrop-filter: blur(6px);",
            div {
                style: "max-width: 1280px; margin: 0 auto; height: 64px; padding: 0 16px; display: flex; align-items: center; justify-content: space-between;",
                button {
                    style: "background: none; border: none; cursor: pointer; font-size: 20px; font-weight: 800; letter-spacing: -0.02em; color: #2563eb;",
                    onclick: move |_| state.navigate(Page::Home),
                    "DWLR"
                }
                nav {
                    class: "dwlr-nav-wide",
                    style: "display: flex; gap: 16px; align-items: center;",
                    {links()}
                }
                button {
                    class: "dwlr-nav-toggle",
                    aria_label: "Toggle menu",
                    style: "border: 1px solid #e5e7eb; border-radius: 6px; background: #fff; width: 40px; height: 40px; cursor: pointer;",
                    onclick: move |_| open.toggle(),
                    "☰"
                }
            }
            if open() {
                div {
                    style: "border-top: 1px solid #e5e7eb; padding: 0 16px 16px; display: flex; flex-direction: column; gap: 8px;",
                    {links()}
                }
            }
        }
    }
}
