//! One component per page.

mod alerts;
mod analysis;
mod assistant;
mod home;
mod location;
mod precautions;

pub use alerts::AlertsPage;
pub use analysis::AnalysisPage;
pub use assistant::AssistantPage;
pub use home::HomePage;
pub use location::LocationPage;
pub use precautions::PrecautionsPage;

use dioxus::prelude::*;
use dwlr_core::tips::ConservationTips;
use std::rc::Rc;

/// Conservation tips parsed once per component.
pub(crate) fn use_tips() -> Rc<ConservationTips> {
    use_hook(|| {
        let tips = ConservationTips::embedded().unwrap_or_else(|e| {
            log::error!("[DWLR] tips: could not parse conservation tips: {:#}", e);
            ConservationTips::default()
        });
        Rc::new(tips)
    })
}

/// A random precaution for alert banners.
pub(crate) fn pick_precaution(tips: &ConservationTips) -> String {
    tips.random_precaution(&mut rand::thread_rng())
        .unwrap_or("Follow local water conservation guidelines")
        .to_string()
}
