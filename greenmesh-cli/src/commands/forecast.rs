//! Forecast command handlers

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Subcommand;
use colored::*;
use greenmesh_core::dto::forecast::{GenForecastQuery, GenForecastWrite};

use super::{or_dash, read_json_file};
use crate::config::Config;

/// Forecast subcommands
#[derive(Subcommand)]
pub enum ForecastCommands {
    /// Show the forecast of an asset
    Get {
        asset_id: i64,

        #[arg(long)]
        start: DateTime<Utc>,

        #[arg(long)]
        end: DateTime<Utc>,

        /// Restrict to one forecast run
        #[arg(long)]
        issue_ts: Option<DateTime<Utc>>,
    },
    /// Upload forecast points from a JSON array file
    Upload { file: String },
}

pub async fn handle_forecast_command(command: ForecastCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        ForecastCommands::Get {
            asset_id,
            start,
            end,
            issue_ts,
        } => {
            let query = GenForecastQuery {
                asset_id,
                start,
                end,
                issue_ts,
            };
            let points = client.get_generation_forecast(&query).await?;

            if points.is_empty() {
                println!("{}", "No forecast points found.".yellow());
            }
            for p in points {
                println!(
                    "  {} {} [{} .. {}] {}",
                    p.ts.format("%Y-%m-%d %H:%M"),
                    or_dash(p.p_kw_pred).bold(),
                    or_dash(p.p10),
                    or_dash(p.p90),
                    or_dash(p.model_version.as_deref()).dimmed(),
                );
            }
        }
        ForecastCommands::Upload { file } => {
            let points: Vec<GenForecastWrite> = read_json_file(&file)?;
            let inserted = client.save_generation_forecast(&points).await?;

            println!(
                "{}",
                format!("✓ Saved {} forecast point(s)", inserted).green().bold()
            );
        }
    }

    Ok(())
}
