use chrono::Local;
use dwlr_core::place::Place;
use dwlr_core::water_level::{ForecastDay, Trend, WaterLevelData, AVERAGE_LEVEL, FORECAST_LABELS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

/// Format of `WaterLevelData::last_updated`, local time.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Where water level readings come from.
///
/// The store only sees this trait, so a real feed could replace the mock
/// without touching the pages.
pub trait WaterLevelSource {
    fn fetch(&self, place: &Place) -> anyhow::Result<WaterLevelData>;
}

/// Random readings in the ranges the dashboard was designed around.
///
/// The place is ignored: every fetch is a fresh roll.
pub struct MockWaterLevelSource {
    rng: RefCell<StdRng>,
}

impl MockWaterLevelSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible readings, for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn forecast_day(rng: &mut StdRng, label: &str) -> ForecastDay {
        ForecastDay {
            day: label.to_string(),
            level: rng.gen_range(500..1500),
            precipitation: rng.gen_range(0..30),
            temperature: rng.gen_range(15..30),
        }
    }
}

impl Default for MockWaterLevelSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl WaterLevelSource for MockWaterLevelSource {
    fn fetch(&self, place: &Place) -> anyhow::Result<WaterLevelData> {
        let mut rng = self.rng.borrow_mut();
        let forecast = FORECAST_LABELS
            .iter()
            .map(|label| Self::forecast_day(&mut rng, label))
            .collect();
        let data = WaterLevelData {
            current_level: rng.gen_range(500..1500),
            average_level: AVERAGE_LEVEL,
            trend: Trend::ALL[rng.gen_range(0..Trend::ALL.len())],
            last_updated: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            forecast,
        };
        log::info!(
            "[DWLR] source: generated reading {}m ({}) for {}",
            data.current_level,
            data.trend.as_str(),
            place.description
        );
        Ok(data)
    }
}
