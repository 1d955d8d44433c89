//! Meter point command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use greenmesh_core::dto::master_data::MeterPointFilter;

use super::or_dash;
use crate::config::Config;

/// Meter point subcommands
#[derive(Subcommand)]
pub enum MeterPointCommands {
    /// List meter points
    List {
        #[arg(long)]
        park_id: Option<i64>,

        #[arg(long)]
        asset_id: Option<i64>,

        #[arg(long)]
        ent_id: Option<i64>,

        #[arg(long)]
        energy_type: Option<String>,
    },
}

pub async fn handle_meter_point_command(command: MeterPointCommands, config: &Config) -> Result<()> {
    let MeterPointCommands::List {
        park_id,
        asset_id,
        ent_id,
        energy_type,
    } = command;

    let filter = MeterPointFilter {
        park_id,
        asset_id,
        ent_id,
        energy_type,
    };
    let points = config.client().list_meter_points(&filter).await?;

    if points.is_empty() {
        println!("{}", "No meter points found.".yellow());
        return Ok(());
    }

    for point in points {
        let critical = if point.is_critical { "critical".red() } else { "".normal() };
        println!(
            "  {} {} {} {} asset={} {}",
            "▸".cyan(),
            point.id.to_string().dimmed(),
            or_dash(point.meas_type.as_deref()).bold(),
            or_dash(point.unit.as_deref()),
            or_dash(point.asset_id),
            critical,
        );
    }

    Ok(())
}
