use std::{process::ExitCode, sync::Arc};

use anyhow::Context;
use cityweather_core::{Config, LoadOutcome, ReqwestClient, WeatherController};
use clap::{Parser, Subcommand};
use inquire::{CustomType, InquireError, Select, Text};
use tracing::debug;

use crate::terminal::TerminalView;

const OTHER_CITY: &str = "Other city...";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Log requests and load cycles to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    Show {
        /// City name, e.g. "London" or "Rio de Janeiro".
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// Pick preset cities (or type one) and show their weather until Esc.
    Pick,

    /// List the preset cities.
    Top,

    /// Edit the preset cities and request timeout.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config = Config::load()?;

        match self.command {
            Command::Show { city } => {
                let controller = build_controller(&config)?;
                if let LoadOutcome::Failed(_) = controller.load(&city.join(" ")).await {
                    return Ok(ExitCode::FAILURE);
                }
            }
            Command::Pick => pick(&config).await?,
            Command::Top => {
                for (i, city) in config.top_cities.iter().enumerate() {
                    println!("{:>2}. {city}", i + 1);
                }
            }
            Command::Configure => configure(config)?,
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn build_controller(config: &Config) -> anyhow::Result<WeatherController> {
    debug!(
        geocoding_url = %config.geocoding_url,
        forecast_url = %config.forecast_url,
        "building controller"
    );
    let http = ReqwestClient::new(config.request_timeout())?;
    WeatherController::from_config(config, Arc::new(http), Arc::new(TerminalView))
}

async fn pick(config: &Config) -> anyhow::Result<()> {
    let controller = Arc::new(build_controller(config)?);

    let mut options = config.top_cities.clone();
    options.push(OTHER_CITY.to_string());

    loop {
        let choice = match Select::new("City:", options.clone()).prompt_skippable() {
            Ok(Some(choice)) => choice,
            Ok(None) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("City selection failed"),
        };

        let city = if choice == OTHER_CITY {
            match Text::new("City name:").prompt_skippable() {
                Ok(Some(city)) => city,
                Ok(None) => continue,
                Err(InquireError::OperationInterrupted) => break,
                Err(e) => return Err(e).context("City input failed"),
            }
        } else {
            choice
        };

        match controller.trigger(city).await {
            Ok(_) => {}
            Err(e) if e.is_cancelled() => {}
            Err(e) => return Err(e).context("Weather load task failed"),
        }
    }

    Ok(())
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let current = config.top_cities.join(", ");
    let cities = Text::new("Preset cities (comma separated):")
        .with_initial_value(&current)
        .prompt()?;
    config.set_top_cities(cities.split(','));

    let timeout = CustomType::<u64>::new("Request timeout in seconds (0 for none):")
        .with_default(config.request_timeout_secs.unwrap_or(0))
        .prompt()?;
    config.request_timeout_secs = (timeout > 0).then_some(timeout);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
