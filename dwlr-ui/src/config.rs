//! Build-time client configuration.
//!
//! Values are baked in with `option_env!` when the WASM bundle is built:
//!
//! - `DWLR_GOOGLE_MAPS_API_KEY`: key for the Maps JavaScript API
//! - `DWLR_API_BASE`: origin of the DWLR server, empty for same-origin

const GOOGLE_MAPS_API_KEY: Option<&str> = option_env!("DWLR_GOOGLE_MAPS_API_KEY");

const API_BASE: &str = match option_env!("DWLR_API_BASE") {
    Some(base) => base,
    None => "",
};

/// The maps key, `None` when unset or blank.
pub fn google_maps_api_key() -> Option<&'static str> {
    non_blank(GOOGLE_MAPS_API_KEY)
}

/// Absolute or same-origin URL of the assistant endpoint.
pub fn chat_endpoint() -> String {
    endpoint(API_BASE, "/api/ai/chat")
}

fn non_blank(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim().trim_end_matches('/'), path)
}
