//! Seasonal chart points and the seeded generator behind them.
//!
//! The generator is a sine hash: `x = sin(index + seed) * 10000`, keep the
//! fractional part, scale into `[min, max]`. It is not random in any useful
//! statistical sense, but it is stable, so the charts for a given place look
//! the same on every render and every reload.

use serde::{Deserialize, Serialize};

/// One bar on a seasonal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalData {
    /// Axis label, e.g. "2024" or "Summer 2024"
    pub label: String,
    /// Water level in meters
    pub value: i32,
    pub year: i32,
}

/// Deterministic pseudo-random integer in `[min, max]` for `(index, seed)`.
pub fn seeded_value(index: i64, seed: i64, min: i32, max: i32) -> i32 {
    let x = ((index + seed) as f64).sin() * 10_000.0;
    let fraction = x - x.floor();
    (fraction * f64::from(max - min + 1) + f64::from(min)).floor() as i32
}

/// The three seasons tracked on the charts and alert pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Monsoon,
    Winter,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Summer, Season::Monsoon, Season::Winter];

    pub fn name(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::Winter => "Winter",
        }
    }

    /// Months covered, as shown in the chart titles.
    pub fn months(&self) -> &'static str {
        match self {
            Season::Summer => "Mar-Jun",
            Season::Monsoon => "Jul-Oct",
            Season::Winter => "Nov-Feb",
        }
    }
}

/// Which generated series a chart shows, with its index offset and value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Annual,
    Seasonal(Season),
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 4] = [
        SeriesKind::Annual,
        SeriesKind::Seasonal(Season::Summer),
        SeriesKind::Seasonal(Season::Monsoon),
        SeriesKind::Seasonal(Season::Winter),
    ];

    /// Offset added to the year index before hashing.
    pub fn index_offset(&self) -> i64 {
        match self {
            SeriesKind::Annual => 1,
            SeriesKind::Seasonal(Season::Summer) => 20,
            SeriesKind::Seasonal(Season::Monsoon) => 40,
            SeriesKind::Seasonal(Season::Winter) => 60,
        }
    }

    /// Inclusive value range in meters.
    pub fn range(&self) -> (i32, i32) {
        match self {
            SeriesKind::Annual => (200, 4800),
            SeriesKind::Seasonal(Season::Summer) => (100, 4000),
            SeriesKind::Seasonal(Season::Monsoon) => (500, 5000),
            SeriesKind::Seasonal(Season::Winter) => (50, 3000),
        }
    }

    pub fn label_for(&self, year: i32) -> String {
        match self {
            SeriesKind::Annual => year.to_string(),
            SeriesKind::Seasonal(season) => format!("{} {}", season.name(), year),
        }
    }

    /// Generate the point for the `idx`-th year of a window.
    pub fn point(&self, idx: usize, year: i32, seed: i64) -> SeasonalData {
        let (min, max) = self.range();
        SeasonalData {
            label: self.label_for(year),
            value: seeded_value(idx as i64 + self.index_offset(), seed, min, max),
            year,
        }
    }
}
