//! Low water level alerts.
//!
//! A value below [`ALERT_THRESHOLD`] raises an alert; below
//! [`CRITICAL_THRESHOLD`] the alert is critical. Alerts are always presented
//! critical-first, then from the lowest value up.

use crate::seasonal::SeasonalData;
use serde::{Deserialize, Serialize};

/// Levels below this raise a low water alert (meters).
pub const ALERT_THRESHOLD: i32 = 3000;
/// Levels below this are critical (meters).
pub const CRITICAL_THRESHOLD: i32 = 2000;

/// Alert classification. Declaration order is presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Low,
}

impl Severity {
    /// Classify a level, `None` when no alert is due.
    pub fn classify(value: i32) -> Option<Severity> {
        if value < CRITICAL_THRESHOLD {
            Some(Severity::Critical)
        } else if value < ALERT_THRESHOLD {
            Some(Severity::Low)
        } else {
            None
        }
    }

    /// The threshold this severity was measured against.
    pub fn threshold(&self) -> i32 {
        match self {
            Severity::Critical => CRITICAL_THRESHOLD,
            Severity::Low => ALERT_THRESHOLD,
        }
    }

    /// Badge text on alert cards.
    pub fn badge(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Low => "Warning",
        }
    }

    pub fn banner_title(&self) -> &'static str {
        match self {
            Severity::Critical => "🚨 Critical Water Level Alert! 🚨",
            Severity::Low => "⚠️ Low Water Level Alert",
        }
    }

    /// "critical" or "recommended", as used in the banner sentence.
    pub fn threshold_kind(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Low => "recommended",
        }
    }
}

/// A raised alert, derived for display and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertData {
    pub season: String,
    pub value: i32,
    pub severity: Severity,
    pub date: String,
    pub location: String,
}

impl AlertData {
    /// Build an alert for `value`, or `None` if the level is fine.
    pub fn from_value(
        season: impl Into<String>,
        value: i32,
        date: impl Into<String>,
        location: impl Into<String>,
    ) -> Option<Self> {
        Severity::classify(value).map(|severity| AlertData {
            season: season.into(),
            value,
            severity,
            date: date.into(),
            location: location.into(),
        })
    }

    /// Banner text on the alerts page.
    pub fn banner_description(&self, precaution: &str) -> String {
        let critically = match self.severity {
            Severity::Critical => "critically ",
            Severity::Low => "",
        };
        format!(
            "Water level is {}low at {}m. This is below the {} threshold of {}m. Recommended action: {}",
            critically,
            self.value,
            self.severity.threshold_kind(),
            self.severity.threshold(),
            precaution
        )
    }

    /// Banner text above the seasonal charts.
    pub fn seasonal_description(&self, year: i32, precaution: &str) -> String {
        format!(
            "{} {} water level is critically low ({}m). This is below the {} threshold of {}m. {}.",
            self.season,
            year,
            self.value,
            self.severity.threshold_kind(),
            self.severity.threshold(),
            precaution
        )
    }

    /// How full the gauge on an alert card is, capped at 100%.
    pub fn fill_percent(&self) -> f64 {
        (f64::from(self.value) / f64::from(self.severity.threshold()) * 100.0).min(100.0)
    }
}

/// Alerts for the current-year points of one season's series.
///
/// `date` is stamped on every alert; `location` names the selected place.
pub fn derive_alerts(
    points: &[SeasonalData],
    season: &str,
    current_year: i32,
    date: &str,
    location: &str,
) -> Vec<AlertData> {
    points
        .iter()
        .filter(|p| p.year == current_year)
        .filter_map(|p| AlertData::from_value(season, p.value, date, location))
        .collect()
}

/// Critical first, then ascending by value.
pub fn sort_alerts(alerts: &mut [AlertData]) {
    alerts.sort_by(|a, b| a.severity.cmp(&b.severity).then(a.value.cmp(&b.value)));
}

/// The alert to feature in the banner: the first critical one, else the first.
pub fn active_alert(alerts: &[AlertData]) -> Option<&AlertData> {
    alerts
        .iter()
        .find(|a| a.severity == Severity::Critical)
        .or_else(|| alerts.first())
}
