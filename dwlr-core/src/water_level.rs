use serde::{Deserialize, Serialize};

/// Long-run average level reported alongside every reading (meters).
pub const AVERAGE_LEVEL: i32 = 1000;

/// Labels of the five forecast entries, in order.
pub const FORECAST_LABELS: [&str; 5] = ["Today", "Tomorrow", "Day 3", "Day 4", "Day 5"];

/// Upper bound of the precipitation scale used by the forecast bars (percent).
pub const PRECIPITATION_SCALE: i32 = 30;

/// Direction of the water level relative to its average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Trend::Up, Trend::Down, Trend::Stable];

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }

    /// Short explanation shown under the trend on the analysis page.
    pub fn description(&self) -> &'static str {
        match self {
            Trend::Up => "Above average",
            Trend::Down => "Below average",
            Trend::Stable => "Stable",
        }
    }

    /// Status word for the analysis page.
    pub fn status_label(&self) -> &'static str {
        match self {
            Trend::Up => "Rising",
            Trend::Down => "Falling",
            Trend::Stable => "Steady",
        }
    }

    /// Arrow glyph used next to the trend label.
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

/// One day of the five-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    /// Water level in meters
    pub level: i32,
    /// Chance of precipitation in percent
    pub precipitation: i32,
    /// Temperature in °C
    pub temperature: i32,
}

impl ForecastDay {
    /// Width of the precipitation bar as a percentage of [`PRECIPITATION_SCALE`].
    pub fn precipitation_bar_percent(&self) -> f64 {
        (f64::from(self.precipitation) / f64::from(PRECIPITATION_SCALE) * 100.0).clamp(0.0, 100.0)
    }
}

/// Water level reading for a place, mirrored into local storage under `waterData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterLevelData {
    pub current_level: i32,
    pub average_level: i32,
    pub trend: Trend,
    pub last_updated: String,
    pub forecast: Vec<ForecastDay>,
}

impl WaterLevelData {
    pub fn highest_forecast_level(&self) -> Option<i32> {
        self.forecast.iter().map(|d| d.level).max()
    }

    pub fn lowest_forecast_level(&self) -> Option<i32> {
        self.forecast.iter().map(|d| d.level).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WaterLevelData {
        WaterLevelData {
            current_level: 812,
            average_level: AVERAGE_LEVEL,
            trend: Trend::Down,
            last_updated: "2026-10-19 09:30:00".to_string(),
            forecast: FORECAST_LABELS
                .iter()
                .zip([700, 1200, 950, 1499, 500])
                .map(|(day, level)| ForecastDay {
                    day: day.to_string(),
                    level,
                    precipitation: 15,
                    temperature: 22,
                })
                .collect(),
        }
    }

    #[test]
    fn forecast_extremes() {
        let data = sample();
        assert_eq!(data.highest_forecast_level(), Some(1499));
        assert_eq!(data.lowest_forecast_level(), Some(500));
    }

    #[test]
    fn storage_layout_is_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["currentLevel"], 812);
        assert_eq!(value["averageLevel"], 1000);
        assert_eq!(value["trend"], "down");
        assert_eq!(value["lastUpdated"], "2026-10-19 09:30:00");
        assert_eq!(value["forecast"][0]["day"], "Today");
    }

    #[test]
    fn precipitation_bar_is_relative_to_scale() {
        let day = ForecastDay {
            day: "Today".to_string(),
            level: 900,
            precipitation: 15,
            temperature: 20,
        };
        assert_eq!(day.precipitation_bar_percent(), 50.0);
    }

    #[test]
    fn every_trend_has_a_status_word() {
        let labels: Vec<&str> = Trend::ALL.iter().map(Trend::status_label).collect();
        assert_eq!(labels, ["Rising", "Falling", "Steady"]);
    }
}
