//! Time-series command handlers

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Subcommand;
use colored::*;
use greenmesh_core::domain::timeseries::Measurement;
use greenmesh_core::dto::timeseries::{MeasurementQuery, RawPointValue};

use super::{or_dash, read_json_file};
use crate::config::Config;

/// Time-series subcommands
#[derive(Subcommand)]
pub enum TimeseriesCommands {
    /// Latest value of each point
    Latest {
        /// Comma-separated point ids
        #[arg(value_delimiter = ',')]
        point_ids: Vec<i64>,
    },
    /// Measurements of one point in a time range
    Range {
        point_id: i64,

        /// RFC 3339 start, inclusive
        #[arg(long)]
        start: DateTime<Utc>,

        /// RFC 3339 end, inclusive
        #[arg(long)]
        end: DateTime<Utc>,

        #[arg(long)]
        limit: Option<i64>,
    },
    /// Upload raw samples from a JSON array file
    Ingest { file: String },
}

pub async fn handle_timeseries_command(command: TimeseriesCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        TimeseriesCommands::Latest { point_ids } => {
            let latest = client.query_latest(&point_ids).await?;
            print_measurements(&latest);
        }
        TimeseriesCommands::Range {
            point_id,
            start,
            end,
            limit,
        } => {
            let query = MeasurementQuery {
                point_id,
                start,
                end,
                limit,
            };
            let measurements = client.query_measurements(&query).await?;
            print_measurements(&measurements);
        }
        TimeseriesCommands::Ingest { file } => {
            let values: Vec<RawPointValue> = read_json_file(&file)?;
            let inserted = client.ingest_raw_batch(&values).await?;

            println!(
                "{}",
                format!("✓ Ingested {} raw sample(s)", inserted).green().bold()
            );
        }
    }

    Ok(())
}

fn print_measurements(measurements: &[Measurement]) {
    if measurements.is_empty() {
        println!("{}", "No measurements found.".yellow());
        return;
    }

    for m in measurements {
        println!(
            "  {} {} {} {}",
            m.point_id.to_string().dimmed(),
            m.ts.format("%Y-%m-%d %H:%M:%S"),
            or_dash(m.value).bold(),
            or_dash(m.quality_flag.as_deref()).dimmed(),
        );
    }
}
