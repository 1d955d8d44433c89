//! Login command

use anyhow::Result;
use colored::*;

use crate::config::Config;

pub async fn login(config: &Config, username: &str, password: &str) -> Result<()> {
    let session = config.client().login(username, password).await?;

    println!("{}", "✓ Logged in".green().bold());
    println!("  User:   {} ({})", session.user.username.bold(), session.user.role);
    println!("  Issued: {}", session.issued_at.format("%Y-%m-%d %H:%M:%S"));
    println!("  Token:  {}", session.token.cyan());
    println!();
    println!("{}", format!("export GREENMESH_TOKEN={}", session.token).dimmed());

    Ok(())
}
