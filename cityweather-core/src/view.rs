//! What the presentation layer shows, and the trait it implements.

use std::fmt::Debug;

use serde::Serialize;

use crate::model::DisplayWeather;

/// Indicator state. Loading and error are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Snapshot handed to the view on every visible transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Panel {
    pub state: LoadState,
    /// Last successfully loaded record; survives later failures.
    pub weather: Option<DisplayWeather>,
}

pub trait WeatherView: Send + Sync + Debug {
    fn render(&self, panel: &Panel);
}
