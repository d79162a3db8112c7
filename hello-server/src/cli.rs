use anyhow::Context;
use clap::{Parser, Subcommand};
use hello_core::{Config, WeatherQuery, provider_from_config};
use hello_server::{AppState, build_router, middleware::TracingAccessLog, server, telemetry};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "hello-server", version, about = "Hello API server")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// Port to listen on; overrides config and `PORT`.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Store the WeatherAPI.com key in the config file.
    Configure,

    /// Print the current weather for a city and exit.
    Show {
        /// City or location name.
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        telemetry::init_tracing(self.json_logs);

        match self.command.unwrap_or(Command::Serve { port: None }) {
            Command::Serve { port } => {
                let mut config = load_config(self.config.as_deref())?;
                if let Some(port) = port {
                    config.server.port = port;
                }
                serve(config).await
            }
            Command::Configure => configure(self.config.as_deref()),
            Command::Show { city } => show(load_config(self.config.as_deref())?, &city).await,
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            let mut config = Config::load_from(path)?;
            config.apply_env(std::env::vars())?;
            Ok(config)
        }
        None => Config::load(),
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        port = config.server.port,
        weather_base_url = %config.weather.base_url,
        weather_timeout_secs = config.weather.timeout_secs,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config)?;
    let router = build_router(state, Arc::new(TracingAccessLog));

    let listener = server::bind(config.server.port).await?;
    server::run(listener, router).await.context("HTTP server failed")
}

fn configure(path: Option<&Path>) -> anyhow::Result<()> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load_from(&Config::config_file_path()?)?,
    };

    let api_key = inquire::Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key);

    let saved_to = match path {
        Some(path) => {
            config.save_to(path)?;
            path.to_path_buf()
        }
        None => config.save()?,
    };

    println!("Saved WeatherAPI key to {}", saved_to.display());
    Ok(())
}

async fn show(config: Config, city: &str) -> anyhow::Result<()> {
    let provider = provider_from_config(&config)?;
    let query = WeatherQuery::from_param(Some(city))?;
    let report = provider.current(&query).await?;

    let location = &report.location;
    let place = [location.name.as_str(), location.region.as_str(), location.country.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    println!("{place}");
    println!("  {:.1}°F, {}", report.current.temp_f, report.current.condition.text);
    Ok(())
}
