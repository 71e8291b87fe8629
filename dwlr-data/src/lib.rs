//! Water level data generation for the DWLR pages.
//!
//! Nothing here talks to a real sensor network. [`source`] produces the
//! randomized reading and five-day forecast behind the location and analysis
//! pages, [`seasonal`] builds the seeded 20-year chart series for the home
//! page, and [`alerts`] rolls the per-season values shown on the alerts page.

pub mod alerts;
pub mod seasonal;
pub mod source;

pub use seasonal::{SeasonalDataset, YearRange, YAxis, WINDOW_YEARS};
pub use source::{MockWaterLevelSource, WaterLevelSource};
