//! Seeded 20-year chart series for the home page.

use dwlr_core::alert::{derive_alerts, sort_alerts, AlertData};
use dwlr_core::seasonal::{Season, SeasonalData, SeriesKind};
use serde::Serialize;

/// Number of years on the charts, ending at the current year.
pub const WINDOW_YEARS: usize = 20;

/// Spacing of the shared y-axis ticks (meters).
pub const Y_TICK_STEP: i32 = 500;

/// Selected slice of the year window, as inclusive indices.
///
/// At least two years are always selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: usize,
    end: usize,
}

impl YearRange {
    pub fn new(start: usize, end: usize) -> anyhow::Result<Self> {
        if start >= end {
            anyhow::bail!("year range start {} must be before end {}", start, end);
        }
        if end >= WINDOW_YEARS {
            anyhow::bail!("year range end {} outside the {} year window", end, WINDOW_YEARS);
        }
        Ok(Self { start, end })
    }

    /// The whole window.
    pub fn full() -> Self {
        Self { start: 0, end: WINDOW_YEARS - 1 }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn year_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Move the start handle, keeping at least one step before the end.
    pub fn with_start(self, start: usize) -> Self {
        Self { start: start.min(self.end - 1), end: self.end }
    }

    /// Move the end handle, keeping at least one step after the start.
    pub fn with_end(self, end: usize) -> Self {
        Self {
            start: self.start,
            end: end.clamp(self.start + 1, WINDOW_YEARS - 1),
        }
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Shared y-axis for all four charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YAxis {
    pub top: i32,
    pub ticks: Vec<i32>,
}

impl YAxis {
    /// Round `max` up to the next tick and lay out ticks from zero.
    pub fn for_max(max: i32) -> Self {
        let top = (max.max(0) + Y_TICK_STEP - 1) / Y_TICK_STEP * Y_TICK_STEP;
        let ticks = (0..=top / Y_TICK_STEP).map(|i| i * Y_TICK_STEP).collect();
        Self { top, ticks }
    }
}

/// All four series for one seed.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalDataset {
    current_year: i32,
    annual: Vec<SeasonalData>,
    summer: Vec<SeasonalData>,
    monsoon: Vec<SeasonalData>,
    winter: Vec<SeasonalData>,
}

impl SeasonalDataset {
    /// Generate the window ending at `current_year`.
    pub fn generate(seed: i64, current_year: i32) -> Self {
        let start_year = current_year - (WINDOW_YEARS as i32 - 1);
        let series = |kind: SeriesKind| -> Vec<SeasonalData> {
            (0..WINDOW_YEARS)
                .map(|idx| kind.point(idx, start_year + idx as i32, seed))
                .collect()
        };
        log::debug!("[DWLR] seasonal: generated {} years for seed {}", WINDOW_YEARS, seed);
        Self {
            current_year,
            annual: series(SeriesKind::Annual),
            summer: series(SeriesKind::Seasonal(Season::Summer)),
            monsoon: series(SeriesKind::Seasonal(Season::Monsoon)),
            winter: series(SeriesKind::Seasonal(Season::Winter)),
        }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn first_year(&self) -> i32 {
        self.current_year - (WINDOW_YEARS as i32 - 1)
    }

    pub fn year_at(&self, index: usize) -> i32 {
        self.first_year() + index as i32
    }

    /// "2010 - 2026" style label for a range.
    pub fn range_label(&self, range: YearRange) -> String {
        format!("{} - {}", self.year_at(range.start), self.year_at(range.end))
    }

    pub fn series(&self, kind: SeriesKind) -> &[SeasonalData] {
        match kind {
            SeriesKind::Annual => &self.annual,
            SeriesKind::Seasonal(Season::Summer) => &self.summer,
            SeriesKind::Seasonal(Season::Monsoon) => &self.monsoon,
            SeriesKind::Seasonal(Season::Winter) => &self.winter,
        }
    }

    /// Points of one series whose year falls inside `range`.
    pub fn filtered(&self, kind: SeriesKind, range: YearRange) -> Vec<SeasonalData> {
        let (from, to) = (self.year_at(range.start), self.year_at(range.end));
        self.series(kind)
            .iter()
            .filter(|p| p.year >= from && p.year <= to)
            .cloned()
            .collect()
    }

    /// Axis scaled to the largest value of any full series, so filtering
    /// never rescales the charts.
    pub fn y_axis(&self) -> YAxis {
        let max = SeriesKind::ALL
            .iter()
            .flat_map(|kind| self.series(*kind).iter().map(|p| p.value))
            .max()
            .unwrap_or(0);
        YAxis::for_max(max)
    }

    /// Current-year seasonal alerts, critical first.
    pub fn current_alerts(&self, date: &str, location: &str) -> Vec<AlertData> {
        let mut alerts: Vec<AlertData> = Season::ALL
            .iter()
            .flat_map(|season| {
                derive_alerts(
                    self.series(SeriesKind::Seasonal(*season)),
                    season.name(),
                    self.current_year,
                    date,
                    location,
                )
            })
            .collect();
        sort_alerts(&mut alerts);
        alerts
    }
}
