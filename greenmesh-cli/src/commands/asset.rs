//! Asset command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use greenmesh_core::domain::asset::Asset;
use greenmesh_core::dto::master_data::AssetFilter;

use super::or_dash;
use crate::config::Config;

/// Asset subcommands
#[derive(Subcommand)]
pub enum AssetCommands {
    /// List assets
    List {
        #[arg(long)]
        park_id: Option<i64>,

        #[arg(long)]
        ent_id: Option<i64>,

        /// e.g. PV, BESS
        #[arg(long)]
        asset_type: Option<String>,
    },
    /// Show one asset
    Get { id: i64 },
}

pub async fn handle_asset_command(command: AssetCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        AssetCommands::List {
            park_id,
            ent_id,
            asset_type,
        } => {
            let filter = AssetFilter {
                park_id,
                ent_id,
                asset_type,
            };
            let assets = client.list_assets(&filter).await?;

            if assets.is_empty() {
                println!("{}", "No assets found.".yellow());
            }
            for asset in &assets {
                println!(
                    "  {} {} {} [{}] {}",
                    "▸".cyan(),
                    asset.id.to_string().dimmed(),
                    asset.name.bold(),
                    asset.asset_type,
                    or_dash(asset.status.as_deref()),
                );
            }
        }
        AssetCommands::Get { id } => print_asset(&client.get_asset(id).await?),
    }

    Ok(())
}

fn print_asset(asset: &Asset) {
    println!("{}", "Asset Details:".bold());
    println!("  ID:        {}", asset.id.to_string().cyan());
    println!("  Name:      {}", asset.name.bold());
    println!("  Type:      {}", asset.asset_type);
    println!("  Park:      {}", asset.park_id);
    println!("  Capacity:  {}", or_dash(asset.rated_capacity));
    println!("  Status:    {}", or_dash(asset.status.as_deref()));
    println!("  Vendor:    {}", or_dash(asset.vendor.as_deref()));
    println!("  Model:     {}", or_dash(asset.model_no.as_deref()));
}
