use std::io::Write;

use cityweather_core::{LoadState, Panel, WeatherView};

const SLOT_LABELS: [&str; 4] = ["City", "Temperature", "Wind", "Conditions"];

/// Prints panel transitions to the terminal.
#[derive(Debug, Default)]
pub struct TerminalView;

impl WeatherView for TerminalView {
    fn render(&self, panel: &Panel) {
        match &panel.state {
            LoadState::Loading => {
                eprint!("Loading weather...");
                let _ = std::io::stderr().flush();
            }
            LoadState::Failed(msg) => {
                eprintln!("\rError: {msg}        ");
            }
            LoadState::Idle => {
                eprint!("\r                  \r");
                if let Some(weather) = &panel.weather {
                    print!("{}", format_slots(&weather.slots()));
                }
            }
        }
    }
}

fn format_slots(slots: &[String; 4]) -> String {
    SLOT_LABELS
        .iter()
        .zip(slots)
        .map(|(label, value)| format!("{label:<12} {value}\n"))
        .collect()
}
