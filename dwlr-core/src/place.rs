use serde::{Deserialize, Serialize};

/// Seed used for the seasonal charts when no coordinates are known.
pub const DEFAULT_SEED: i64 = 42;

/// Name shown when no place has been selected.
pub const FALLBACK_LOCATION_NAME: &str = "Current Location";

/// A normalized search result produced by the location search adapter.
///
/// The JSON layout is what gets mirrored into browser local storage under
/// the `selectedLocation` key, so field names follow the places API
/// (`place_id`, `formatted_address`) rather than Rust conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Full human-readable description, e.g. "Pune, Maharashtra, India"
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Place {
    /// A place with only a description (no identifier, no geometry).
    pub fn from_description(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            place_id: None,
            lat: None,
            lng: None,
            formatted_address: None,
            name: None,
        }
    }

    /// Latitude/longitude pair, if both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    /// Chart seed for this place: `floor((lat + lng) * 1000)`.
    ///
    /// Falls back to [`DEFAULT_SEED`] when either coordinate is missing or
    /// both are exactly zero, so an unlocated search still gets stable charts.
    pub fn seed(&self) -> i64 {
        match self.coordinates() {
            Some((lat, lng)) if lat != 0.0 && lng != 0.0 => ((lat + lng) * 1000.0).floor() as i64,
            _ => DEFAULT_SEED,
        }
    }

    /// First comma-separated component of the description ("Pune").
    pub fn short_name(&self) -> &str {
        self.description
            .split(',')
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_LOCATION_NAME)
    }
}

/// Seed for an optional selection.
pub fn seed_for(place: Option<&Place>) -> i64 {
    place.map(Place::seed).unwrap_or(DEFAULT_SEED)
}

/// Display name for an optional selection.
pub fn location_name(place: Option<&Place>) -> String {
    place
        .map(|p| p.short_name().to_string())
        .unwrap_or_else(|| FALLBACK_LOCATION_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pune() -> Place {
        Place {
            description: "Pune, Maharashtra, India".to_string(),
            place_id: Some("ChIJARFGZy6_wjsRQ-Oenb9DjYI".to_string()),
            lat: Some(18.5204),
            lng: Some(73.8567),
            formatted_address: Some("Pune, Maharashtra, India".to_string()),
            name: Some("Pune".to_string()),
        }
    }

    #[test]
    fn seed_uses_coordinates() {
        // (18.5204 + 73.8567) * 1000 = 92377.1
        assert_eq!(pune().seed(), 92377);
    }

    #[test]
    fn seed_falls_back_without_coordinates() {
        let place = Place::from_description("Somewhere");
        assert_eq!(place.seed(), DEFAULT_SEED);
        assert_eq!(seed_for(None), DEFAULT_SEED);
    }

    #[test]
    fn short_name_takes_first_component() {
        assert_eq!(pune().short_name(), "Pune");
        assert_eq!(Place::from_description("").short_name(), FALLBACK_LOCATION_NAME);
        assert_eq!(location_name(None), FALLBACK_LOCATION_NAME);
    }

    #[test]
    fn json_omits_missing_fields() {
        let json = serde_json::to_string(&Place::from_description("Goa")).unwrap();
        assert_eq!(json, r#"{"description":"Goa"}"#);

        let parsed: Place =
            serde_json::from_str(r#"{"description":"Pune","lat":18.5,"lng":73.8}"#).unwrap();
        assert_eq!(parsed.coordinates(), Some((18.5, 73.8)));
        assert!(parsed.place_id.is_none());
    }
}
