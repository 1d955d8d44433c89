//! Dispatch plan command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use greenmesh_core::domain::dispatch::{DispatchPlan, DispatchPlanWithDetails};
use greenmesh_core::dto::dispatch::{CreateDispatchPlan, DispatchPlanFilter};

use super::{or_dash, read_json_file};
use crate::config::Config;

/// Plan subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// List plans, newest first
    List {
        #[arg(long)]
        park_id: Option<i64>,

        #[arg(long)]
        status: Option<String>,
    },
    /// Show a plan with its setpoints
    Get { id: i64 },
    /// Create a plan from a JSON file
    Create { file: String },
}

pub async fn handle_plan_command(command: PlanCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        PlanCommands::List { park_id, status } => {
            let plans = client
                .list_plans(&DispatchPlanFilter { park_id, status })
                .await?;

            if plans.is_empty() {
                println!("{}", "No dispatch plans found.".yellow());
            }
            for plan in &plans {
                print_plan_summary(plan);
            }
        }
        PlanCommands::Get { id } => print_plan_details(&client.get_plan(id).await?),
        PlanCommands::Create { file } => {
            let req: CreateDispatchPlan = read_json_file(&file)?;
            let plan = client.create_plan(&req).await?;

            println!("{}", "✓ Dispatch plan created successfully!".green().bold());
            print_plan_details(&plan);
        }
    }

    Ok(())
}

fn print_plan_summary(plan: &DispatchPlan) {
    println!(
        "  {} {} park={} {} {} .. {}",
        "▸".cyan(),
        plan.id.to_string().bold(),
        plan.park_id,
        plan.status.yellow(),
        plan.horizon_start.format("%Y-%m-%d %H:%M"),
        plan.horizon_end.format("%H:%M"),
    );
}

fn print_plan_details(plan: &DispatchPlanWithDetails) {
    let header = &plan.plan;

    println!("{}", "Dispatch Plan:".bold());
    println!("  ID:       {}", header.id.to_string().cyan());
    println!("  Park:     {}", header.park_id);
    println!("  Status:   {}", header.status.yellow());
    println!(
        "  Horizon:  {} .. {}",
        header.horizon_start.format("%Y-%m-%d %H:%M:%S"),
        header.horizon_end.format("%Y-%m-%d %H:%M:%S")
    );
    println!("  Interval: {} min", or_dash(header.interval_min));
    println!("  Created:  {}", header.created_ts.format("%Y-%m-%d %H:%M:%S"));

    println!("\n{}", "Setpoints:".bold());
    println!("{}", "─".repeat(72).dimmed());
    for d in &plan.details {
        println!(
            "  {} asset={} p={} q={} heat={} soc={}",
            d.ts.format("%H:%M"),
            d.asset_id,
            or_dash(d.p_set_kw),
            or_dash(d.q_set_kvar),
            or_dash(d.heat_set_mw),
            or_dash(d.soc_target),
        );
    }
    println!("{}", "─".repeat(72).dimmed());
}
