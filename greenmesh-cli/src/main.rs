//! GreenMesh CLI
//!
//! Command-line interface for the GreenMesh dashboard backend.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "greenmesh")]
#[command(about = "GreenMesh energy-park CLI", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(long, env = "GREENMESH_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Token from `greenmesh login`, sent as a bearer token
    #[arg(long, env = "GREENMESH_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        token: cli.token,
    };

    handle_command(cli.command, &config).await
}
