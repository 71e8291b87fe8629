//! Google Places implementation of [`PlaceSearch`].

use crate::js_bridge::{self, describe_js_error, js_arg};
use async_trait::async_trait;
use dwlr_geo::{GeoError, PlaceDetails, PlaceSearch, Prediction, PredictionRequest, Result};
use serde::Deserialize;

const STATUS_OK: &str = "OK";

#[derive(Deserialize)]
struct PredictionsReply {
    status: String,
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
struct DetailsReply {
    status: String,
    result: Option<PlaceDetails>,
}

/// Autocomplete and details lookups through `window.dwlrMaps`.
///
/// Only usable once the maps script has loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct GooglePlaces;

impl GooglePlaces {
    async fn call(code: &str) -> Result<String> {
        let value = js_bridge::eval_promise(code)
            .await
            .map_err(|e| GeoError::InvalidResponse(describe_js_error(&e)))?;
        value
            .as_string()
            .ok_or_else(|| GeoError::InvalidResponse("expected a JSON string".to_string()))
    }
}

#[async_trait(?Send)]
impl PlaceSearch for GooglePlaces {
    async fn predictions(&self, request: &PredictionRequest) -> Result<Vec<Prediction>> {
        let code = format!(
            "window.dwlrMaps.getPredictions({}, {}, {})",
            js_arg(&request.input),
            js_arg(&request.country),
            js_arg(&request.types)
        );
        let raw = Self::call(&code).await?;
        parse_predictions(&raw)
    }

    async fn details(&self, place_id: &str) -> Result<PlaceDetails> {
        let code = format!("window.dwlrMaps.getDetails({})", js_arg(place_id));
        let raw = Self::call(&code).await?;
        parse_details(&raw)
    }
}

fn parse_predictions(raw: &str) -> Result<Vec<Prediction>> {
    let reply: PredictionsReply =
        serde_json::from_str(raw).map_err(|e| GeoError::InvalidResponse(e.to_string()))?;
    if reply.status != STATUS_OK {
        return Err(GeoError::Status(reply.status));
    }
    Ok(reply.predictions)
}

fn parse_details(raw: &str) -> Result<PlaceDetails> {
    let reply: DetailsReply =
        serde_json::from_str(raw).map_err(|e| GeoError::InvalidResponse(e.to_string()))?;
    if reply.status != STATUS_OK {
        return Err(GeoError::Status(reply.status));
    }
    reply
        .result
        .ok_or_else(|| GeoError::InvalidResponse("details without a result".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_predictions_are_returned() {
        let raw = r#"{"status":"OK","predictions":[
            {"description":"Pune, Maharashtra, India","place_id":"p1","main_text":"Pune","secondary_text":"Maharashtra, India"}
        ]}"#;
        let predictions = parse_predictions(raw).unwrap();
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].main_text, "Pune");
    }

    #[test]
    fn zero_results_is_a_status_error() {
        let raw = r#"{"status":"ZERO_RESULTS","predictions":[]}"#;
        assert_eq!(
            parse_predictions(raw),
            Err(GeoError::Status("ZERO_RESULTS".to_string()))
        );
    }

    #[test]
    fn details_carry_coordinates() {
        let raw = r#"{"status":"OK","result":{"name":"Pune","formatted_address":"Pune, Maharashtra, India","lat":18.52,"lng":73.85}}"#;
        let details = parse_details(raw).unwrap();
        assert_eq!(details.lat, Some(18.52));
        assert_eq!(details.name.as_deref(), Some("Pune"));
    }

    #[test]
    fn details_without_result_are_invalid() {
        let raw = r#"{"status":"OK","result":null}"#;
        assert!(matches!(parse_details(raw), Err(GeoError::InvalidResponse(_))));
    }
}
