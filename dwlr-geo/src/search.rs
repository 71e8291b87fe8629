//! Location search over a place-autocomplete provider.

use crate::error::{GeoError, Result};
use async_trait::async_trait;
use dwlr_core::place::Place;
use serde::{Deserialize, Serialize};

/// Country searches are restricted to.
pub const SEARCH_COUNTRY: &str = "in";
/// Place types searches are restricted to.
pub const SEARCH_TYPES: &str = "(regions)";

/// Autocomplete query sent to the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub input: String,
    pub country: String,
    pub types: Vec<String>,
}

impl PredictionRequest {
    pub fn regions_in_india(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            country: SEARCH_COUNTRY.to_string(),
            types: vec![SEARCH_TYPES.to_string()],
        }
    }
}

/// One autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub description: String,
    pub place_id: String,
    /// Bold first line of the dropdown entry
    #[serde(default)]
    pub main_text: String,
    #[serde(default)]
    pub secondary_text: String,
}

/// Geometry and names from a details lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl PlaceDetails {
    /// Merge with the chosen prediction into the normalized [`Place`].
    pub fn into_place(self, prediction: &Prediction) -> Place {
        Place {
            description: prediction.description.clone(),
            place_id: Some(prediction.place_id.clone()),
            lat: self.lat,
            lng: self.lng,
            formatted_address: self.formatted_address,
            name: self.name,
        }
    }
}

/// Place autocomplete and details capability.
#[async_trait(?Send)]
pub trait PlaceSearch {
    async fn predictions(&self, request: &PredictionRequest) -> Result<Vec<Prediction>>;
    async fn details(&self, place_id: &str) -> Result<PlaceDetails>;
}

/// Search box logic: suggestions while typing, a normalized place on pick.
///
/// Built unavailable when the provider could not be set up; it then answers
/// every query with nothing and exposes a notice instead.
pub struct LocationSearch<P> {
    provider: std::result::Result<P, GeoError>,
}

impl<P: PlaceSearch> LocationSearch<P> {
    pub fn new(provider: P) -> Self {
        Self { provider: Ok(provider) }
    }

    pub fn unavailable(reason: GeoError) -> Self {
        log::warn!("[DWLR] search: places unavailable: {}", reason);
        Self { provider: Err(reason) }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_ok()
    }

    /// User-visible notice, if search is unavailable.
    pub fn notice(&self) -> Option<&'static str> {
        self.provider.as_ref().err().map(GeoError::search_notice)
    }

    /// Suggestions for the current input. Empty input clears without a
    /// request; provider failures are logged and clear the list.
    pub async fn suggest(&self, input: &str) -> Vec<Prediction> {
        let provider = match &self.provider {
            Ok(provider) if !input.trim().is_empty() => provider,
            _ => return Vec::new(),
        };
        match provider
            .predictions(&PredictionRequest::regions_in_india(input))
            .await
        {
            Ok(predictions) => predictions,
            Err(e) => {
                log::error!("[DWLR] search: error fetching predictions: {}", e);
                Vec::new()
            }
        }
    }

    /// Look up `prediction` and hand the normalized place to `on_select`.
    ///
    /// Returns whether `on_select` ran; details failures are logged only.
    pub async fn select<F: FnOnce(Place)>(&self, prediction: &Prediction, on_select: F) -> bool {
        let Ok(provider) = &self.provider else {
            return false;
        };
        match provider.details(&prediction.place_id).await {
            Ok(details) => {
                let place = details.into_place(prediction);
                log::info!("[DWLR] search: selected {}", place.description);
                on_select(place);
                true
            }
            Err(e) => {
                log::error!("[DWLR] search: error getting place details: {}", e);
                false
            }
        }
    }

    /// Form submit picks the first suggestion, if any.
    pub async fn submit<F: FnOnce(Place)>(&self, predictions: &[Prediction], on_select: F) -> bool {
        match predictions.first() {
            Some(first) => self.select(first, on_select).await,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct FakePlaces {
        status: Option<String>,
        requests: RefCell<Vec<PredictionRequest>>,
        detail_calls: Cell<usize>,
    }

    impl FakePlaces {
        fn ok() -> Self {
            Self {
                status: None,
                requests: RefCell::new(Vec::new()),
                detail_calls: Cell::new(0),
            }
        }

        fn failing(status: &str) -> Self {
            Self {
                status: Some(status.to_string()),
                ..Self::ok()
            }
        }
    }

    #[async_trait(?Send)]
    impl PlaceSearch for FakePlaces {
        async fn predictions(&self, request: &PredictionRequest) -> Result<Vec<Prediction>> {
            self.requests.borrow_mut().push(request.clone());
            if let Some(status) = &self.status {
                return Err(GeoError::Status(status.clone()));
            }
            Ok(vec![Prediction {
                description: format!("{}, Maharashtra, India", request.input),
                place_id: format!("id-{}", request.input),
                main_text: request.input.clone(),
                secondary_text: "Maharashtra, India".to_string(),
            }])
        }

        async fn details(&self, place_id: &str) -> Result<PlaceDetails> {
            self.detail_calls.set(self.detail_calls.get() + 1);
            if let Some(status) = &self.status {
                return Err(GeoError::Status(status.clone()));
            }
            Ok(PlaceDetails {
                name: Some(place_id.trim_start_matches("id-").to_string()),
                formatted_address: Some("Pune, Maharashtra, India".to_string()),
                lat: Some(18.5204),
                lng: Some(73.8567),
            })
        }
    }

    fn pune_prediction() -> Prediction {
        Prediction {
            description: "Pune, Maharashtra, India".to_string(),
            place_id: "id-Pune".to_string(),
            main_text: "Pune".to_string(),
            secondary_text: "Maharashtra, India".to_string(),
        }
    }

    #[test]
    fn suggestions_are_restricted_to_indian_regions() {
        let search = LocationSearch::new(FakePlaces::ok());
        let predictions = block_on(search.suggest("Pune"));
        assert_eq!(predictions.len(), 1);

        let provider = search.provider.as_ref().unwrap();
        let request = &provider.requests.borrow()[0];
        assert_eq!(request.country, "in");
        assert_eq!(request.types, vec!["(regions)".to_string()]);
    }

    #[test]
    fn empty_input_makes_no_request() {
        let search = LocationSearch::new(FakePlaces::ok());
        assert!(block_on(search.suggest("  ")).is_empty());
        assert!(search.provider.as_ref().unwrap().requests.borrow().is_empty());
    }

    #[test]
    fn bad_status_clears_predictions() {
        let search = LocationSearch::new(FakePlaces::failing("ZERO_RESULTS"));
        assert!(block_on(search.suggest("Xyz")).is_empty());
    }

    #[test]
    fn select_emits_normalized_place() {
        let search = LocationSearch::new(FakePlaces::ok());
        let picked = RefCell::new(None);
        let ran = block_on(search.select(&pune_prediction(), |place| {
            *picked.borrow_mut() = Some(place)
        }));
        assert!(ran);
        let place = picked.into_inner().unwrap();
        assert_eq!(place.description, "Pune, Maharashtra, India");
        assert_eq!(place.place_id.as_deref(), Some("id-Pune"));
        assert_eq!(place.name.as_deref(), Some("Pune"));
        assert_eq!(place.coordinates(), Some((18.5204, 73.8567)));
    }

    #[test]
    fn failed_details_do_not_emit() {
        let search = LocationSearch::new(FakePlaces::failing("NOT_FOUND"));
        let ran = block_on(search.select(&pune_prediction(), |_| panic!("must not be called")));
        assert!(!ran);
    }

    #[test]
    fn submit_uses_first_prediction() {
        let search = LocationSearch::new(FakePlaces::ok());
        assert!(!block_on(search.submit(&[], |_| {})));
        let names = RefCell::new(Vec::new());
        let predictions = vec![pune_prediction(), Prediction {
            description: "Goa, India".to_string(),
            place_id: "id-Goa".to_string(),
            main_text: "Goa".to_string(),
            secondary_text: "India".to_string(),
        }];
        block_on(search.submit(&predictions, |p| names.borrow_mut().push(p.description)));
        assert_eq!(names.into_inner(), vec!["Pune, Maharashtra, India".to_string()]);
    }

    #[test]
    fn missing_key_shows_notice_and_no_predictions() {
        let search: LocationSearch<FakePlaces> = LocationSearch::unavailable(GeoError::MissingApiKey);
        assert!(!search.is_available());
        assert_eq!(
            search.notice(),
            Some("Google Maps API key is not configured. Please check your environment variables.")
        );
        assert!(block_on(search.suggest("Pune")).is_empty());
        assert!(!block_on(search.select(&pune_prediction(), |_| {})));
    }

    #[test]
    fn prediction_parses_provider_json() {
        let p: Prediction =
            serde_json::from_str(r#"{"description":"Goa, India","place_id":"abc"}"#).unwrap();
        assert_eq!(p.main_text, "");
        assert_eq!(p.place_id, "abc");
    }
}
