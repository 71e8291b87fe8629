/// Errors raised by the place search and map adapters
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// No maps API key was configured at build time
    #[error("Google Maps API key is not configured")]
    MissingApiKey,

    /// The maps script failed to load
    #[error("Failed to load Google Maps script: {0}")]
    LoadFailed(String),

    /// The maps script did not finish loading in time
    #[error("Google Maps API load timeout")]
    LoadTimeout,

    /// The provider answered with a non-OK status
    #[error("Places service returned status {0}")]
    Status(String),

    /// A provider reply could not be decoded
    #[error("Invalid places response: {0}")]
    InvalidResponse(String),

    /// A map operation was attempted before the map was created
    #[error("Map is not initialized")]
    MapNotReady,
}

impl GeoError {
    /// Notice shown under the search box.
    pub fn search_notice(&self) -> &'static str {
        match self {
            GeoError::MissingApiKey => {
                "Google Maps API key is not configured. Please check your environment variables."
            }
            _ => "Failed to load Google Maps. Please try again later.",
        }
    }

    /// Notice shown above the map.
    pub fn map_notice(&self) -> &'static str {
        match self {
            GeoError::MissingApiKey => {
                "Google Maps API key is not configured. Please check your environment variables."
            }
            _ => "Google Maps failed to load. Check API key and network.",
        }
    }
}

/// Type alias for Results using GeoError
pub type Result<T> = std::result::Result<T, GeoError>;
