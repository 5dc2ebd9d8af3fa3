//! Shared fakes for controller and client tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use cityweather_core::{Config, HttpClient, HttpResponse, Panel, WeatherController, WeatherView};
use parking_lot::Mutex;
use reqwest::Url;
use tokio::sync::Notify;

#[derive(Debug)]
struct Route {
    pattern: String,
    reply: Result<HttpResponse, String>,
    gate: Option<Arc<Notify>>,
}

/// In-memory `HttpClient`: the first route whose pattern occurs in the URL answers.
#[derive(Debug, Default)]
pub struct FakeHttp {
    routes: Mutex<Vec<Route>>,
    hits: Mutex<Vec<String>>,
}

impl FakeHttp {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, pattern: &str, status: u16, body: impl Into<String>) {
        self.push(pattern, Ok(HttpResponse::new(status, body)), None);
    }

    pub fn respond_json(&self, pattern: &str, status: u16, body: serde_json::Value) {
        self.respond(pattern, status, body.to_string());
    }

    /// Like `respond_json`, but the reply is held until `gate` is notified.
    pub fn respond_json_after(&self, pattern: &str, body: serde_json::Value, gate: Arc<Notify>) {
        self.push(pattern, Ok(HttpResponse::new(200, body.to_string())), Some(gate));
    }

    pub fn fail(&self, pattern: &str, message: &str) {
        self.push(pattern, Err(message.to_string()), None);
    }

    fn push(&self, pattern: &str, reply: Result<HttpResponse, String>, gate: Option<Arc<Notify>>) {
        self.routes.lock().push(Route {
            pattern: pattern.to_string(),
            reply,
            gate,
        });
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().clone()
    }

    pub fn was_hit(&self, pattern: &str) -> bool {
        self.hits.lock().iter().any(|u| u.contains(pattern))
    }
}

#[async_trait]
impl HttpClient for FakeHttp {
    async fn get(&self, url: &Url) -> anyhow::Result<HttpResponse> {
        let url = url.as_str().to_string();
        self.hits.lock().push(url.clone());

        let (reply, gate) = {
            let routes = self.routes.lock();
            let route = routes
                .iter()
                .find(|r| url.contains(&r.pattern))
                .ok_or_else(|| anyhow::anyhow!("no route for {url}"))?;
            (route.reply.clone(), route.gate.clone())
        };

        if let Some(gate) = gate {
            gate.notified().await;
        }

        reply.map_err(|msg| anyhow::anyhow!(msg).context("Failed to send request"))
    }
}

/// View that keeps every panel it was asked to render.
#[derive(Debug, Default)]
pub struct RecordingView {
    frames: Mutex<Vec<Panel>>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn frames(&self) -> Vec<Panel> {
        self.frames.lock().clone()
    }

    pub fn last(&self) -> Option<Panel> {
        self.frames.lock().last().cloned()
    }

    /// Number of Loading → not-Loading transitions seen.
    pub fn loading_hidden_count(&self) -> usize {
        self.frames
            .lock()
            .windows(2)
            .filter(|w| w[0].state.is_loading() && !w[1].state.is_loading())
            .count()
    }
}

impl WeatherView for RecordingView {
    fn render(&self, panel: &Panel) {
        self.frames.lock().push(panel.clone());
    }
}

pub fn geocoding_body(latitude: f64, longitude: f64) -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "id": 1,
                "name": "Somewhere",
                "latitude": latitude,
                "longitude": longitude,
                "country": "X"
            }
        ],
        "generationtime_ms": 0.4
    })
}

pub fn current_body(temperature: f64, wind: f64, code: i64) -> serde_json::Value {
    serde_json::json!({
        "latitude": 0.0,
        "longitude": 0.0,
        "current": {
            "time": "2026-10-17T12:00",
            "interval": 900,
            "temperature_2m": temperature,
            "wind_speed_10m": wind,
            "weather_code": code
        }
    })
}

pub fn controller(http: Arc<FakeHttp>, view: Arc<RecordingView>) -> WeatherController {
    WeatherController::from_config(&Config::default(), http, view).expect("default config is valid")
}
