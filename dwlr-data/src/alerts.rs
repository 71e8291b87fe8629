//! Per-season readings for the alerts page.

use chrono::Local;
use dwlr_core::alert::{sort_alerts, AlertData};
use dwlr_core::seasonal::Season;
use rand::Rng;

/// Upper bound (exclusive) of the rolled seasonal readings.
pub const MAX_ALERT_READING: i32 = 3500;

/// Roll one reading per season and keep the ones that raise an alert,
/// critical first then lowest value.
pub fn roll_season_alerts<R: Rng + ?Sized>(rng: &mut R, date: &str, location: &str) -> Vec<AlertData> {
    let mut alerts: Vec<AlertData> = Season::ALL
        .iter()
        .filter_map(|season| {
            let value = rng.gen_range(0..MAX_ALERT_READING);
            AlertData::from_value(season.name(), value, date, location)
        })
        .collect();
    sort_alerts(&mut alerts);
    log::info!("[DWLR] alerts: {} active alerts for {}", alerts.len(), location);
    alerts
}

/// Today's date as printed on alert cards.
pub fn today_label() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwlr_core::alert::{Severity, ALERT_THRESHOLD};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn at_most_one_alert_per_season() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let alerts = roll_season_alerts(&mut rng, "19/10/2026", "Pune");
            assert!(alerts.len() <= 3);
            let seasons: std::collections::HashSet<&str> =
                alerts.iter().map(|a| a.season.as_str()).collect();
            assert_eq!(seasons.len(), alerts.len());
            assert!(alerts.iter().all(|a| a.value < ALERT_THRESHOLD && a.location == "Pune"));
        }
    }

    #[test]
    fn rolled_alerts_are_sorted() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let alerts = roll_season_alerts(&mut rng, "", "Current Location");
            for pair in alerts.windows(2) {
                let ordered = pair[0].severity < pair[1].severity
                    || (pair[0].severity == pair[1].severity && pair[0].value <= pair[1].value);
                assert!(ordered, "{:?} before {:?}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn critical_alerts_show_up() {
        let mut rng = StdRng::seed_from_u64(2);
        let any_critical = (0..50)
            .flat_map(|_| roll_season_alerts(&mut rng, "", ""))
            .any(|a| a.severity == Severity::Critical);
        assert!(any_critical);
    }

    #[test]
    fn today_label_is_a_date() {
        assert_eq!(today_label().split('/').count(), 3);
    }
}
