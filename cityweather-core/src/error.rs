//! Error taxonomy for one geocode → weather load cycle.

use std::fmt;

use thiserror::Error;

/// Message shown when a failure carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "Failed to fetch weather data.";

/// External service a request was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Geocoding,
    Forecast,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Geocoding => "Geocoding",
            Service::Forecast => "Weather fetch",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum WeatherError {
    /// The service answered with a non-success status.
    #[error("{service} failed: {reason}")]
    Http {
        service: Service,
        status: u16,
        reason: String,
    },

    /// Geocoding succeeded but returned no candidate.
    #[error("City not found")]
    CityNotFound { city: String },

    /// The forecast response had no `current` block.
    #[error("Weather data missing (no current field).")]
    MissingCurrent,

    #[error("{service} request could not be completed: {source:#}")]
    Transport {
        service: Service,
        #[source]
        source: anyhow::Error,
    },

    #[error("{service} returned a malformed response: {source}")]
    Decode {
        service: Service,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl WeatherError {
    /// Text for the error indicator, falling back to a generic message.
    pub fn display_message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            msg
        }
    }
}
