//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Clients for city geocoding and current conditions (Open-Meteo)
//! - The weather-code classifier
//! - The load-cycle controller and the view trait it renders through
//! - Configuration handling
//!
//! It is used by `cityweather-cli`, but any presentation layer can drive it by
//! implementing [`WeatherView`].

pub mod condition;
pub mod config;
pub mod controller;
pub mod error;
pub mod forecast;
pub mod geocoder;
pub mod http;
pub mod model;
pub mod view;

pub use condition::{WeatherCondition, describe};
pub use config::Config;
pub use controller::{LoadOutcome, WeatherController};
pub use error::WeatherError;
pub use forecast::ForecastClient;
pub use geocoder::Geocoder;
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use model::{Coordinate, CurrentConditions, DisplayWeather};
pub use view::{LoadState, Panel, WeatherView};
