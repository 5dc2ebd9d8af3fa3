//! Current conditions for a coordinate, via the Open-Meteo forecast endpoint.

use std::sync::Arc;

use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{Service, WeatherError},
    http::{HttpClient, error_reason},
    model::{Coordinate, CurrentConditions},
};

pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str = "temperature_2m,wind_speed_10m,weather_code";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Arc<dyn HttpClient>,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current: Option<OmCurrent>,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
    wind_speed_10m: f64,
    weather_code: i64,
}

impl From<OmCurrent> for CurrentConditions {
    fn from(c: OmCurrent) -> Self {
        Self {
            temperature_celsius: c.temperature_2m,
            wind_speed_kph: c.wind_speed_10m,
            weather_code: c.weather_code,
        }
    }
}

impl ForecastClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn current_url(&self, at: Coordinate) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &at.latitude.to_string())
            .append_pair("longitude", &at.longitude.to_string())
            .append_pair("current", CURRENT_FIELDS)
            .append_pair("temperature_unit", "celsius")
            .append_pair("wind_speed_unit", "kmh");
        url
    }

    pub async fn current(&self, at: Coordinate) -> Result<CurrentConditions, WeatherError> {
        let url = self.current_url(at);
        debug!(%url, "fetching current conditions");

        let res = self.http.get(&url).await.map_err(|source| WeatherError::Transport {
            service: Service::Forecast,
            source,
        })?;

        if !res.is_success() {
            return Err(WeatherError::Http {
                service: Service::Forecast,
                status: res.status,
                reason: error_reason(&res),
            });
        }

        let parsed: ForecastResponse =
            serde_json::from_str(&res.body).map_err(|source| WeatherError::Decode {
                service: Service::Forecast,
                source,
            })?;

        let current = parsed.current.ok_or(WeatherError::MissingCurrent)?;
        Ok(current.into())
    }
}
