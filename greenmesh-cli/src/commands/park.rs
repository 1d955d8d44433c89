//! Park command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use greenmesh_client::GreenmeshClient;
use greenmesh_core::domain::park::Park;
use greenmesh_core::dto::master_data::CreatePark;

use super::or_dash;
use crate::config::Config;

/// Park subcommands
#[derive(Subcommand)]
pub enum ParkCommands {
    /// List all parks
    List,
    /// Show one park
    Get { id: i64 },
    /// Register a new park
    Create {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        region: Option<String>,

        /// IANA timezone, defaults to Asia/Shanghai on the server
        #[arg(short, long)]
        timezone: Option<String>,
    },
}

pub async fn handle_park_command(command: ParkCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        ParkCommands::List => list_parks(&client).await,
        ParkCommands::Get { id } => {
            let park = client.get_park(id).await?;
            print_park(&park);
            Ok(())
        }
        ParkCommands::Create {
            name,
            region,
            timezone,
        } => {
            let req = CreatePark {
                name,
                region,
                timezone,
                boundary_geojson: None,
            };
            let park = client.create_park(&req).await?;

            println!("{}", "✓ Park created successfully!".green().bold());
            print_park(&park);
            Ok(())
        }
    }
}

async fn list_parks(client: &GreenmeshClient) -> Result<()> {
    let parks = client.list_parks().await?;

    if parks.is_empty() {
        println!("{}", "No parks found.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} park(s):", parks.len()).bold());
    for park in parks {
        println!(
            "  {} {} {} {}",
            "▸".cyan(),
            park.id.to_string().dimmed(),
            park.name.bold(),
            or_dash(park.region.as_deref()),
        );
    }

    Ok(())
}

fn print_park(park: &Park) {
    println!("  ID:       {}", park.id.to_string().cyan());
    println!("  Name:     {}", park.name.bold());
    println!("  Region:   {}", or_dash(park.region.as_deref()));
    println!("  Timezone: {}", or_dash(park.timezone.as_deref()));
}
