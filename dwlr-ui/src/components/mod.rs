//! Reusable Dioxus RSX components for the DWLR pages.

mod alert_banner;
mod chart_container;
mod chart_header;
mod error_display;
mod footer;
mod loading_spinner;
mod location_search;
mod navbar;
mod notice;
mod section_card;
mod tip_list;
mod year_range_selector;

pub use alert_banner::AlertBanner;
pub use chart_container::{ChartContainer, ReferenceLine};
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use footer::Footer;
pub use loading_spinner::LoadingSpinner;
pub use location_search::LocationSearchBox;
pub use navbar::Navbar;
pub use notice::Notice;
pub use section_card::SectionCard;
pub use tip_list::TipList;
pub use year_range_selector::YearRangeSelector;
