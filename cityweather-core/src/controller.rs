//! Orchestrates one load cycle: geocode, fetch current conditions, classify,
//! and publish the result to the view.
//!
//! Overlapping cycles are resolved in favour of the latest trigger. Each cycle
//! takes a ticket when it shows the loading indicator; only the holder of the
//! newest ticket may touch the panel afterwards. Older cycles settle silently.

use std::sync::Arc;

use anyhow::Context;
use parking_lot::Mutex;
use reqwest::Url;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, info, warn};

use crate::{
    condition::describe,
    config::Config,
    error::WeatherError,
    forecast::ForecastClient,
    geocoder::Geocoder,
    http::HttpClient,
    model::DisplayWeather,
    view::{LoadState, Panel, WeatherView},
};

/// How a load cycle ended, from the caller's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Shown(DisplayWeather),
    Failed(String),
    /// A newer trigger took over the panel before this cycle settled.
    Superseded,
}

#[derive(Debug, Default)]
struct Shared {
    panel: Panel,
    ticket: u64,
}

#[derive(Debug)]
pub struct WeatherController {
    geocoder: Geocoder,
    forecast: ForecastClient,
    view: Arc<dyn WeatherView>,
    shared: Mutex<Shared>,
    inflight: Mutex<Option<AbortHandle>>,
}

impl WeatherController {
    pub fn new(geocoder: Geocoder, forecast: ForecastClient, view: Arc<dyn WeatherView>) -> Self {
        Self {
            geocoder,
            forecast,
            view,
            shared: Mutex::new(Shared::default()),
            inflight: Mutex::new(None),
        }
    }

    /// Build both clients from the configured endpoints over a shared HTTP client.
    pub fn from_config(
        config: &Config,
        http: Arc<dyn HttpClient>,
        view: Arc<dyn WeatherView>,
    ) -> anyhow::Result<Self> {
        let geocoding_url = Url::parse(&config.geocoding_url)
            .with_context(|| format!("Invalid geocoding_url: {}", config.geocoding_url))?;
        let forecast_url = Url::parse(&config.forecast_url)
            .with_context(|| format!("Invalid forecast_url: {}", config.forecast_url))?;

        Ok(Self::new(
            Geocoder::new(Arc::clone(&http), geocoding_url),
            ForecastClient::new(http, forecast_url),
            view,
        ))
    }

    pub fn panel(&self) -> Panel {
        self.shared.lock().panel.clone()
    }

    /// Run one load cycle for `city` and wait for it to settle.
    ///
    /// Never fails: errors end up in the panel and in the returned outcome.
    pub async fn load(&self, city: &str) -> LoadOutcome {
        let city = city.trim();
        let guard = LoadingGuard::acquire(self);
        info!(city, ticket = guard.ticket, "loading weather");

        let result = self.fetch(city).await;
        guard.settle(result)
    }

    /// Spawn a load cycle, aborting the one previously spawned by this method.
    pub fn trigger(self: &Arc<Self>, city: impl Into<String>) -> JoinHandle<LoadOutcome> {
        let city = city.into();
        let this = Arc::clone(self);
        let handle = tokio::spawn(async move { this.load(&city).await });

        if let Some(previous) = self.inflight.lock().replace(handle.abort_handle()) {
            debug!("aborting previous load");
            previous.abort();
        }

        handle
    }

    async fn fetch(&self, city: &str) -> Result<DisplayWeather, WeatherError> {
        let at = self.geocoder.locate(city).await?;
        let current = self.forecast.current(at).await?;

        Ok(DisplayWeather {
            city: city.to_string(),
            temperature_celsius: current.temperature_celsius,
            wind_speed_kph: current.wind_speed_kph,
            description: describe(current.weather_code).to_string(),
        })
    }

    /// Apply `change` if `ticket` still owns the panel; render when it reports a change.
    ///
    /// The view is called with the lock held so renders reach it in ticket order.
    fn with_panel(&self, ticket: u64, change: impl FnOnce(&mut Panel) -> bool) -> bool {
        let mut shared = self.shared.lock();
        if shared.ticket != ticket {
            return false;
        }
        if change(&mut shared.panel) {
            self.view.render(&shared.panel);
        }
        true
    }
}

/// Holds the loading indicator for one cycle; hides it on drop if still shown.
struct LoadingGuard<'a> {
    controller: &'a WeatherController,
    ticket: u64,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(controller: &'a WeatherController) -> Self {
        let mut shared = controller.shared.lock();
        shared.ticket += 1;
        shared.panel.state = LoadState::Loading;
        controller.view.render(&shared.panel);

        Self {
            controller,
            ticket: shared.ticket,
        }
    }

    fn settle(self, result: Result<DisplayWeather, WeatherError>) -> LoadOutcome {
        match result {
            Ok(weather) => {
                let owned = self.controller.with_panel(self.ticket, |panel| {
                    panel.weather = Some(weather.clone());
                    false
                });
                if !owned {
                    debug!(ticket = self.ticket, "discarding superseded result");
                    return LoadOutcome::Superseded;
                }
                info!(city = %weather.city, description = %weather.description, "weather loaded");
                LoadOutcome::Shown(weather)
            }
            Err(err) => {
                let message = err.display_message();
                warn!(error = %err, "weather load failed");

                let owned = self.controller.with_panel(self.ticket, |panel| {
                    panel.state = LoadState::Failed(message.clone());
                    true
                });
                if !owned {
                    return LoadOutcome::Superseded;
                }
                LoadOutcome::Failed(message)
            }
        }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.controller.with_panel(self.ticket, |panel| {
            if panel.state.is_loading() {
                panel.state = LoadState::Idle;
                true
            } else {
                false
            }
        });
    }
}
