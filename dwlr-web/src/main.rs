//! DWLR Seasonal Water Insights
//!
//! Groundwater level insights for places in India: seasonal charts on the
//! home page, a map-driven tracker with a five-day forecast, derived
//! low-level alerts, conservation tips and an AI assistant.
//!
//! Data flow:
//! 1. `AppState::new` restores the last place and reading from local storage.
//! 2. Searching a place updates the shared store; the location page also
//!    simulates a fetch that generates a reading and forecast.
//! 3. Pages re-render from the mirrored signals; the charts and alerts are
//!    regenerated from the place's seed.
//! 4. The assistant page talks to the server's `POST /api/ai/chat` proxy.

mod pages;

use dioxus::prelude::*;
use dwlr_ui::components::{Footer, Navbar};
use dwlr_ui::route::Page;
use dwlr_ui::state::AppState;
use pages::{AlertsPage, AnalysisPage, AssistantPage, HomePage, LocationPage, PrecautionsPage};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dwlr-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let page = (state.page)();

    rsx! {
        div {
            style: "min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #111827; background: #f9fafb;",
            Navbar {}
            main {
                style: "max-width: 1280px; margin: 0 auto; padding: 32px 16px;",
                match page {
                    Page::Home => rsx! { HomePage {} },
                    Page::Location => rsx! { LocationPage {} },
                    Page::Analysis => rsx! { AnalysisPage {} },
                    Page::Alerts => rsx! { AlertsPage {} },
                    Page::Precautions => rsx! { PrecautionsPage {} },
                    Page::Assistant => rsx! { AssistantPage {} },
                }
            }
            Footer {}
        }
    }
}
