//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod asset;
mod auth;
mod carbon;
mod forecast;
mod meter_point;
mod park;
mod plan;
mod timeseries;

pub use asset::AssetCommands;
pub use carbon::CarbonFactorCommands;
pub use forecast::ForecastCommands;
pub use meter_point::MeterPointCommands;
pub use park::ParkCommands;
pub use plan::PlanCommands;
pub use timeseries::TimeseriesCommands;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use serde::de::DeserializeOwned;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Log in and print a token
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },
    /// Park management
    Park {
        #[command(subcommand)]
        command: ParkCommands,
    },
    /// Asset lookup
    Asset {
        #[command(subcommand)]
        command: AssetCommands,
    },
    /// Meter point lookup
    MeterPoint {
        #[command(subcommand)]
        command: MeterPointCommands,
    },
    /// Carbon emission factors
    CarbonFactor {
        #[command(subcommand)]
        command: CarbonFactorCommands,
    },
    /// Measurements and raw ingest
    Timeseries {
        #[command(subcommand)]
        command: TimeseriesCommands,
    },
    /// Generation forecasts
    Forecast {
        #[command(subcommand)]
        command: ForecastCommands,
    },
    /// Dispatch plans
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Login { username, password } => auth::login(config, &username, &password).await,
        Commands::Park { command } => park::handle_park_command(command, config).await,
        Commands::Asset { command } => asset::handle_asset_command(command, config).await,
        Commands::MeterPoint { command } => {
            meter_point::handle_meter_point_command(command, config).await
        }
        Commands::CarbonFactor { command } => carbon::handle_carbon_command(command, config).await,
        Commands::Timeseries { command } => {
            timeseries::handle_timeseries_command(command, config).await
        }
        Commands::Forecast { command } => forecast::handle_forecast_command(command, config).await,
        Commands::Plan { command } => plan::handle_plan_command(command, config).await,
    }
}

/// Read and deserialize a JSON request body from disk
fn read_json_file<T: DeserializeOwned>(path: &str) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path))?;

    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path))
}

/// Render an optional column, dimming missing values
fn or_dash<T: ToString>(value: Option<T>) -> ColoredString {
    match value {
        Some(v) => v.to_string().normal(),
        None => "-".dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenmesh_core::dto::timeseries::RawPointValue;

    #[test]
    fn test_read_json_file() {
        let path = std::env::temp_dir().join("greenmesh-cli-read-json-test.json");
        std::fs::write(&path, r#"[{"pointId": 1, "ts": "2024-05-01T00:00:00Z", "value": 3.5}]"#)
            .unwrap();

        let values: Vec<RawPointValue> = read_json_file(path.to_str().unwrap()).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].point_id, 1);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_read_json_file_reports_path() {
        let err = read_json_file::<serde_json::Value>("/nonexistent/greenmesh.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/greenmesh.json"));
    }

    #[test]
    fn test_cli_parses_nested_subcommands() {
        use clap::Parser;

        #[derive(Parser)]
        struct TestCli {
            #[command(subcommand)]
            command: Commands,
        }

        let cli = TestCli::try_parse_from(["greenmesh", "meter-point", "list", "--park-id", "3"])
            .unwrap();
        assert!(matches!(cli.command, Commands::MeterPoint { .. }));

        let cli = TestCli::try_parse_from(["greenmesh", "timeseries", "latest", "1,2"]).unwrap();
        assert!(matches!(cli.command, Commands::Timeseries { .. }));
    }
}
