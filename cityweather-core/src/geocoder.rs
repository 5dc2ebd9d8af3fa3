//! City name → coordinate, via the Open-Meteo geocoding search.

use std::sync::Arc;

use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{Service, WeatherError},
    http::{HttpClient, error_reason},
    model::Coordinate,
};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

const CANDIDATE_COUNT: &str = "10";
const LANGUAGE: &str = "en";

#[derive(Debug, Clone)]
pub struct Geocoder {
    http: Arc<dyn HttpClient>,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Option<Vec<GeoResult>>,
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

impl Geocoder {
    pub fn new(http: Arc<dyn HttpClient>, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn search_url(&self, city: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("name", city)
            .append_pair("count", CANDIDATE_COUNT)
            .append_pair("language", LANGUAGE)
            .append_pair("format", "json");
        url
    }

    /// Coordinate of the highest-ranked match for `city`. One attempt, no retries.
    pub async fn locate(&self, city: &str) -> Result<Coordinate, WeatherError> {
        let url = self.search_url(city);
        debug!(%url, "geocoding city");

        let res = self.http.get(&url).await.map_err(|source| WeatherError::Transport {
            service: Service::Geocoding,
            source,
        })?;

        if !res.is_success() {
            return Err(WeatherError::Http {
                service: Service::Geocoding,
                status: res.status,
                reason: error_reason(&res),
            });
        }

        let parsed: GeoResponse =
            serde_json::from_str(&res.body).map_err(|source| WeatherError::Decode {
                service: Service::Geocoding,
                source,
            })?;

        let best = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::CityNotFound {
                city: city.to_string(),
            })?;

        debug!(
            name = best.name.as_deref().unwrap_or("?"),
            country = best.country.as_deref().unwrap_or("?"),
            latitude = best.latitude,
            longitude = best.longitude,
            "geocoded"
        );

        Ok(Coordinate {
            latitude: best.latitude,
            longitude: best.longitude,
        })
    }
}
