//! Carbon factor command handlers

use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;
use colored::*;
use greenmesh_core::dto::master_data::CarbonFactorFilter;

use super::or_dash;
use crate::config::Config;

/// Carbon factor subcommands
#[derive(Subcommand)]
pub enum CarbonFactorCommands {
    /// List emission factors
    List {
        #[arg(long)]
        region: Option<String>,

        #[arg(long)]
        energy_type: Option<String>,

        /// Only factors in force on this day (YYYY-MM-DD)
        #[arg(long)]
        active_on: Option<NaiveDate>,
    },
}

pub async fn handle_carbon_command(command: CarbonFactorCommands, config: &Config) -> Result<()> {
    let CarbonFactorCommands::List {
        region,
        energy_type,
        active_on,
    } = command;

    let filter = CarbonFactorFilter {
        region,
        energy_type,
        active_on,
    };
    let factors = config.client().list_carbon_factors(&filter).await?;

    if factors.is_empty() {
        println!("{}", "No carbon factors found.".yellow());
        return Ok(());
    }

    for factor in factors {
        let default = if factor.is_default { "default".cyan() } else { "".normal() };
        println!(
            "  {} {} {} {} {} {} .. {} {}",
            "▸".cyan(),
            factor.id.to_string().dimmed(),
            or_dash(factor.region.as_deref()),
            or_dash(factor.energy_type.as_deref()),
            format!("{} {}", or_dash(factor.factor_value), or_dash(factor.unit.as_deref())).bold(),
            factor.effective_from,
            or_dash(factor.effective_to),
            default,
        );
    }

    Ok(())
}
