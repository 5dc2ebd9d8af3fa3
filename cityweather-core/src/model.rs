use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions as reported by the forecast service, metric units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_celsius: f64,
    pub wind_speed_kph: f64,
    pub weather_code: i64,
}

/// The record written into the four display slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayWeather {
    pub city: String,
    pub temperature_celsius: f64,
    pub wind_speed_kph: f64,
    pub description: String,
}

impl DisplayWeather {
    pub fn temperature_text(&self) -> String {
        format!("{} °C", unsigned_zero(self.temperature_celsius))
    }

    pub fn wind_text(&self) -> String {
        format!("{} km/h", unsigned_zero(self.wind_speed_kph))
    }

    /// Slot contents in display order: city, temperature, wind, description.
    pub fn slots(&self) -> [String; 4] {
        [
            self.city.clone(),
            self.temperature_text(),
            self.wind_text(),
            self.description.clone(),
        ]
    }
}

/// `-0.0` prints as "-0"; adding positive zero turns it into `0.0`.
fn unsigned_zero(value: f64) -> f64 {
    value + 0.0
}
